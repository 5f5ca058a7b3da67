//! Stores chave-valor usados pelo cache de métricas.
//!
//! O store é um recurso externo e compartilhado. O cache só exige
//! `put` (upsert incondicional) e `get` (busca pontual); replicação,
//! persistência e expiração são responsabilidade de cada backend.
//!
//! ## Backends
//!
//! - **MemoryStore**: LRU em memória, útil para testes e uso local
//! - **SqliteStore**: tabela SQLite persistente (feature `sqlite`)

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use std::sync::Arc;

use async_trait::async_trait;

use crate::MetricsResult;

/// Contrato do store chave-valor externo.
///
/// Implementações devem garantir que o valor de uma única chave seja
/// lido ou escrito de forma atômica: um `get` concorrente a um `put`
/// vê a ausência ou o valor completo, nunca um valor parcial.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Grava `value` sob `key`, substituindo qualquer valor anterior.
    async fn put(&self, key: &str, value: Vec<u8>) -> MetricsResult<()>;

    /// Busca o valor de `key`. `None` se a chave não existe.
    async fn get(&self, key: &str) -> MetricsResult<Option<Vec<u8>>>;

    /// Nome do backend.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn put(&self, key: &str, value: Vec<u8>) -> MetricsResult<()> {
        (**self).put(key, value).await
    }

    async fn get(&self, key: &str) -> MetricsResult<Option<Vec<u8>>> {
        (**self).get(key).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
