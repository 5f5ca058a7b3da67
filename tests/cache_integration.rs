//! Testes de integração para o cache de métricas.

use std::sync::Arc;

use modelmetrics::metrics::checksum;
use modelmetrics::store::{KeyValueStore, MemoryStore};
use modelmetrics::types::{DatasetRef, ModelCategory, ModelRef};
use modelmetrics::{EvaluationPayload, MetricsCache, MetricsKey, ModelMetrics};

fn sample_payload() -> EvaluationPayload {
    EvaluationPayload::empty()
        .with_auc(serde_json::json!({"auc": 0.93, "thresholds": [0.1, 0.5, 0.9]}))
        .with_confusion_matrix(serde_json::json!([[50, 3], [4, 43]]))
}

// Cenário ponta a ponta
mod end_to_end {
    use super::*;

    #[tokio::test]
    async fn test_checksum_change_misses() {
        let cache = MetricsCache::new(MemoryStore::default());
        let mut model = ModelRef::new("M", 100, ModelCategory::Binomial);
        let dataset = DatasetRef::new("D", 200);

        let record = cache
            .create(&model, &dataset, 5000, -1, EvaluationPayload::empty())
            .await
            .expect("Failed to store metrics");

        assert_eq!(record.key().as_str(), "modelmetrics_M@100_on_D@200");

        let hit = cache.get(&model, &dataset).await.expect("Failed to get");
        assert_eq!(hit.as_ref().and_then(|r| r.duration_ms()), Some(5000));
        assert_eq!(hit, Some(record));

        // Modelo retreinado: novo checksum, nova chave
        model.checksum = 101;
        let miss = cache.get(&model, &dataset).await.expect("Failed to get");
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn test_dataset_change_misses() {
        let cache = MetricsCache::new(MemoryStore::default());
        let model = ModelRef::new("M", 1, ModelCategory::Regression);
        let mut dataset = DatasetRef::new("D", 1);

        cache
            .create(&model, &dataset, 10, 5, sample_payload())
            .await
            .unwrap();

        dataset.checksum = 2;
        assert!(cache.get(&model, &dataset).await.unwrap().is_none());
    }
}

// Propriedades de identidade
mod identity_tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let model = ModelRef::new("deeplearning_7", -3, ModelCategory::AutoEncoder);
        let dataset = DatasetRef::new("frame.hex", 0);

        assert_eq!(
            MetricsKey::for_pair(&model, &dataset),
            MetricsKey::for_pair(&model, &dataset)
        );
    }

    #[test]
    fn test_colliding_combined_checksums_are_distinct_identities() {
        let (m1, d1) = (
            ModelRef::new("M", 13, ModelCategory::Unknown),
            DatasetRef::new("D", 0),
        );
        let (m2, d2) = (
            ModelRef::new("M", 0, ModelCategory::Unknown),
            DatasetRef::new("D", 17),
        );

        assert_eq!(checksum::combine(13, 0), checksum::combine(0, 17));

        let r1 = ModelMetrics::snapshot(&m1, &d1);
        assert_eq!(r1.checksum(), ModelMetrics::snapshot(&m2, &d2).checksum());
        assert!(!(r1.is_for_model(&m2) && r1.is_for_dataset(&d2)));
        assert!(r1.is_for_model(&m1) && r1.is_for_dataset(&d1));
    }
}

// Stores compartilhados e concorrência
mod store_tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_preserves_payload() {
        let cache = MetricsCache::new(MemoryStore::default());
        let model = ModelRef::new("glm_2", 77, ModelCategory::Binomial);
        let dataset = DatasetRef::new("valid.hex", 88);

        let stored = cache
            .create(&model, &dataset, 1200, 300, sample_payload())
            .await
            .unwrap();
        let fetched = cache.get(&model, &dataset).await.unwrap().unwrap();

        assert_eq!(fetched, stored);
        assert_eq!(fetched.payload(), &sample_payload());
        assert_eq!(fetched.model_category(), Some(ModelCategory::Binomial));
    }

    #[tokio::test]
    async fn test_caches_share_store() {
        let store = Arc::new(MemoryStore::default());
        let writer = MetricsCache::new(Arc::clone(&store));
        let reader = MetricsCache::new(Arc::clone(&store));

        let model = ModelRef::new("M", 1, ModelCategory::Clustering);
        let dataset = DatasetRef::new("D", 2);

        writer
            .create(&model, &dataset, 1, 1, EvaluationPayload::empty())
            .await
            .unwrap();

        assert!(reader.get_valid(&model, &dataset).await.unwrap().is_some());
        assert_eq!(reader.stats().hits, 1);
        assert_eq!(writer.stats().writes, 1);
    }

    #[tokio::test]
    async fn test_concurrent_writers_same_key() {
        let cache = Arc::new(MetricsCache::new(MemoryStore::default()));
        let model = ModelRef::new("M", 5, ModelCategory::Multinomial);
        let dataset = DatasetRef::new("D", 6);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let model = model.clone();
            let dataset = dataset.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .create(&model, &dataset, 100, 10, EvaluationPayload::empty())
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let record = cache.get(&model, &dataset).await.unwrap().unwrap();
        assert_eq!(record.duration_ms(), Some(100));
        assert_eq!(cache.store().len().unwrap(), 1);
    }

    #[cfg(feature = "sqlite")]
    #[tokio::test]
    async fn test_sqlite_survives_reopen() {
        use modelmetrics::store::SqliteStore;

        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("metrics.db");
        let model = ModelRef::new("M", 100, ModelCategory::Binomial);
        let dataset = DatasetRef::new("D", 200);

        let stored = {
            let cache = MetricsCache::new(SqliteStore::new(&db_path).unwrap());
            cache
                .create(&model, &dataset, 5000, 40, sample_payload())
                .await
                .unwrap()
        };

        let store = SqliteStore::new(&db_path).unwrap();
        assert_eq!(store.name(), "sqlite");
        let cache = MetricsCache::new(store);
        assert_eq!(cache.get(&model, &dataset).await.unwrap(), Some(stored));
    }
}
