//! Cache endereçado por conteúdo para métricas de avaliação.
//!
//! Uma avaliação de um modelo sobre um dataset é guardada sob uma chave
//! derivada das identidades e checksums dos dois. Mudou o modelo ou o
//! dataset, mudou a chave.
//!
//! ## Componentes
//!
//! - **checksum**: combinação linear (com perda) dos dois checksums
//! - **MetricsKey**: chave `modelmetrics_<m>@<cm>_on_<d>@<cd>`
//! - **ModelMetrics**: registro imutável e validação de identidade
//! - **MetricsCache**: put/get sobre um [`KeyValueStore`](crate::store::KeyValueStore)
//!
//! ## Exemplo
//!
//! ```rust,ignore
//! use modelmetrics::metrics::{EvaluationPayload, MetricsCache};
//! use modelmetrics::store::MemoryStore;
//! use modelmetrics::types::{DatasetRef, ModelCategory, ModelRef};
//!
//! let cache = MetricsCache::new(MemoryStore::default());
//! let model = ModelRef::new("M", 100, ModelCategory::Binomial);
//! let dataset = DatasetRef::new("D", 200);
//!
//! cache.create(&model, &dataset, 5000, 120, EvaluationPayload::empty()).await?;
//! let hit = cache.get_valid(&model, &dataset).await?;
//! ```

mod cache;
pub mod checksum;
mod key;
mod record;

pub use cache::{CacheStats, MetricsCache};
pub use key::{MetricsKey, KEY_PREFIX};
pub use record::{EvaluationPayload, ModelMetrics, UNSET};
