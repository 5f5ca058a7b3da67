//! # modelmetrics
//!
//! Cache endereçado por conteúdo para métricas de avaliação de modelos.
//!
//! Dado um par (modelo, dataset), deriva uma chave determinística a partir
//! das identidades e checksums, guarda o resultado da avaliação em um store
//! chave-valor compartilhado e o recupera depois sem recomputar, detectando
//! quando o modelo ou o dataset mudaram.
//!
//! ## Módulos
//!
//! - [`metrics`] - Chaves, registros, validação e adaptador de cache
//! - [`store`] - Stores chave-valor (memória, SQLite)
//! - [`presentation`] - Visões externas dos registros
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

#[cfg(feature = "cli")]
pub mod cli;
pub mod metrics;
pub mod presentation;
pub mod store;
pub mod types;

pub use metrics::{EvaluationPayload, MetricsCache, MetricsKey, ModelMetrics};
pub use types::config::Config;
pub use types::errors::{MetricsError, MetricsResult};
