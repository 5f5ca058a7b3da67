//! Adaptador entre registros de métricas e o store chave-valor.

use std::sync::atomic::{AtomicU64, Ordering};

use super::key::MetricsKey;
use super::record::{EvaluationPayload, ModelMetrics};
use crate::store::KeyValueStore;
use crate::types::identity::{Dataset, Model};
use crate::MetricsResult;

/// Estatísticas do cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,

    /// Número de escritas.
    pub writes: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache de métricas sobre um store injetado.
///
/// Não faz locking próprio: escritas concorrentes na mesma chave seguem
/// "last writer wins" no store. Como a chave codifica os checksums, duas
/// escritas na mesma chave vêm de entradas idênticas.
pub struct MetricsCache<S> {
    store: S,
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
}

impl<S: KeyValueStore> MetricsCache<S> {
    /// Cria um novo cache.
    pub fn new(store: S) -> Self {
        Self {
            store,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
        }
    }

    /// Store subjacente.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Grava o registro sob `record.key()`, substituindo o valor anterior.
    pub async fn put(&self, record: &ModelMetrics) -> MetricsResult<()> {
        let key = record.key();
        tracing::debug!(key = %key, store = self.store.name(), "Putting ModelMetrics");

        let value = serde_json::to_vec(record)?;
        self.store.put(key.as_str(), value).await?;
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Cria o registro a partir do estado atual, grava e o retorna.
    pub async fn create<M, D>(
        &self,
        model: &M,
        dataset: &D,
        duration_ms: i64,
        scoring_time_ms: i64,
        payload: EvaluationPayload,
    ) -> MetricsResult<ModelMetrics>
    where
        M: Model + Sync + ?Sized,
        D: Dataset + Sync + ?Sized,
    {
        let record = ModelMetrics::new(model, dataset, duration_ms, scoring_time_ms, payload);
        self.put(&record).await?;
        Ok(record)
    }

    /// Busca métricas pelo estado atual do modelo e do dataset.
    ///
    /// Retorna `Ok(None)` se não houver entrada para a chave. Não valida
    /// o registro encontrado; veja [`Self::get_valid`].
    pub async fn get<M, D>(&self, model: &M, dataset: &D) -> MetricsResult<Option<ModelMetrics>>
    where
        M: Model + Sync + ?Sized,
        D: Dataset + Sync + ?Sized,
    {
        let key = MetricsKey::for_pair(model, dataset);
        self.get_by_key(&key).await
    }

    /// Busca métricas por uma chave já construída.
    pub async fn get_by_key(&self, key: &MetricsKey) -> MetricsResult<Option<ModelMetrics>> {
        let record = self.fetch(key).await?;
        self.record_lookup(record.is_some());
        Ok(record)
    }

    /// Busca e valida contra o modelo e o dataset.
    ///
    /// Um registro só é aceito se as identidades forem as mesmas do par
    /// consultado e se passar em `is_for_model`/`is_for_dataset`. Registros
    /// rejeitados contam como miss.
    pub async fn get_valid<M, D>(
        &self,
        model: &M,
        dataset: &D,
    ) -> MetricsResult<Option<ModelMetrics>>
    where
        M: Model + Sync + ?Sized,
        D: Dataset + Sync + ?Sized,
    {
        let key = MetricsKey::for_pair(model, dataset);
        let record = self.fetch(&key).await?.filter(|r| {
            // Identidades com `@` ou `_on_` podem gerar a mesma chave
            if r.model() != Some(model.identity()) || r.dataset() != Some(dataset.identity()) {
                tracing::debug!(key = %key, "ModelMetrics for another identity ignored");
                return false;
            }
            if !(r.is_for_model(model) && r.is_for_dataset(dataset)) {
                tracing::debug!(key = %key, "Stale ModelMetrics ignored");
                return false;
            }
            true
        });

        self.record_lookup(record.is_some());
        Ok(record)
    }

    async fn fetch(&self, key: &MetricsKey) -> MetricsResult<Option<ModelMetrics>> {
        tracing::debug!(key = %key, store = self.store.name(), "Getting ModelMetrics");

        match self.store.get(key.as_str()).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn record_lookup(&self, hit: bool) {
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
        }
    }
}
