//! Store LRU em memória.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lru::LruCache;

use super::KeyValueStore;
use crate::{MetricsError, MetricsResult};

/// Valor armazenado.
#[derive(Debug, Clone)]
struct StoredValue {
    value: Vec<u8>,
    stored_at: DateTime<Utc>,
}

impl StoredValue {
    fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            stored_at: Utc::now(),
        }
    }
}

/// Store em memória com limite de capacidade.
///
/// Quando cheio, descarta a entrada usada há mais tempo. Essa expulsão é
/// uma política do store, não do cache de métricas.
pub struct MemoryStore {
    entries: Mutex<LruCache<String, StoredValue>>,
}

impl MemoryStore {
    /// Cria um novo store.
    ///
    /// Capacidade zero é tratada como uma entrada.
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Cria um store com capacidade padrão.
    pub fn with_default_capacity() -> Self {
        Self::new(10_000)
    }

    fn lock(&self) -> MetricsResult<MutexGuard<'_, LruCache<String, StoredValue>>> {
        self.entries
            .lock()
            .map_err(|_| MetricsError::store("lock do store em memória envenenado"))
    }

    /// Número de entradas.
    pub fn len(&self) -> MetricsResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Indica se o store está vazio.
    pub fn is_empty(&self) -> MetricsResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Capacidade máxima.
    pub fn capacity(&self) -> MetricsResult<usize> {
        Ok(self.lock()?.cap().get())
    }

    /// Momento da última escrita de `key`.
    pub fn stored_at(&self, key: &str) -> MetricsResult<Option<DateTime<Utc>>> {
        Ok(self.lock()?.peek(key).map(|v| v.stored_at))
    }

    /// Remove todas as entradas.
    pub fn clear(&self) -> MetricsResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn put(&self, key: &str, value: Vec<u8>) -> MetricsResult<()> {
        self.lock()?.put(key.to_string(), StoredValue::new(value));
        Ok(())
    }

    async fn get(&self, key: &str) -> MetricsResult<Option<Vec<u8>>> {
        Ok(self.lock()?.get(key).map(|v| v.value.clone()))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get() {
        let store = MemoryStore::new(10);
        store.put("k", b"v1".to_vec()).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"v1".to_vec()));
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.stored_at("k").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryStore::new(10);
        assert!(store.get("missing").await.unwrap().is_none());
        assert!(store.stored_at("missing").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemoryStore::new(10);
        store.put("k", b"v1".to_vec()).await.unwrap();
        store.put("k", b"v2".to_vec()).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(b"v2".to_vec()));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let store = MemoryStore::new(2);
        store.put("key1", vec![1]).await.unwrap();
        store.put("key2", vec![2]).await.unwrap();
        store.put("key3", vec![3]).await.unwrap(); // Deve expulsar key1

        assert!(store.get("key1").await.unwrap().is_none());
        assert!(store.get("key2").await.unwrap().is_some());
        assert!(store.get("key3").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::new(10);
        store.put("key1", vec![1]).await.unwrap();
        store.clear().unwrap();

        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(MemoryStore::default().capacity().unwrap(), 10_000);
        assert_eq!(MemoryStore::with_default_capacity().capacity().unwrap(), 10_000);
    }

    #[test]
    fn test_zero_capacity() {
        let store = MemoryStore::new(0);
        assert_eq!(store.capacity().unwrap(), 1);
    }
}
