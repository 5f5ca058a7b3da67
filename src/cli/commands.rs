//! Implementação dos comandos CLI do modelmetrics.

use std::path::{Path, PathBuf};

use crate::metrics::{checksum, EvaluationPayload, MetricsCache, MetricsKey};
use crate::presentation::{format_summary, MetricsSummary, MetricsView};
use crate::types::category::ModelCategory;
use crate::types::config::{Config, StoreBackend};
use crate::MetricsResult;

use super::PairArgs;

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> MetricsResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("modelmetrics.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let data_dir = target_dir.join(".modelmetrics");
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!(".modelmetrics/ directory created");
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("modelmetrics initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!("Data directory: .modelmetrics/");

    Ok(())
}

/// Mostra a chave e o checksum combinado de um par.
pub fn key(pair: &PairArgs) -> MetricsResult<()> {
    let (model, dataset) = pair.to_refs(ModelCategory::Unknown);
    let key = MetricsKey::for_pair(&model, &dataset);

    println!("{}", key);
    println!(
        "combined checksum: {}",
        checksum::combine(pair.model_checksum, pair.dataset_checksum)
    );

    Ok(())
}

/// Grava métricas de um par.
pub async fn put(
    pair: &PairArgs,
    category: ModelCategory,
    duration_ms: i64,
    scoring_time_ms: i64,
    payload: Option<&Path>,
    config: &Config,
) -> MetricsResult<()> {
    let payload = match payload {
        Some(path) => read_payload(path)?,
        None => EvaluationPayload::empty(),
    };

    warn_if_ephemeral(config);

    let (model, dataset) = pair.to_refs(category);
    let cache = MetricsCache::new(config.open_store()?);
    let record = cache
        .create(&model, &dataset, duration_ms, scoring_time_ms, payload)
        .await?;

    tracing::info!(key = %record.key(), "Metrics stored");
    println!("Stored: {}", record.key());

    Ok(())
}

/// Busca métricas de um par.
///
/// Um miss não é erro: imprime "not cached" e retorna `Ok`.
pub async fn get(pair: &PairArgs, json: bool, config: &Config) -> MetricsResult<()> {
    warn_if_ephemeral(config);

    let (model, dataset) = pair.to_refs(ModelCategory::Unknown);
    let cache = MetricsCache::new(config.open_store()?);

    match cache.get_valid(&model, &dataset).await? {
        Some(record) => {
            let summary = MetricsSummary::render(&record);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_summary(&summary));
            }
        }
        None => {
            println!("not cached: {}", MetricsKey::for_pair(&model, &dataset));
        }
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("modelmetrics {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Content-addressed cache for model evaluation metrics");
}

fn read_payload(path: &Path) -> MetricsResult<EvaluationPayload> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn warn_if_ephemeral(config: &Config) {
    if config.store.backend == StoreBackend::Memory {
        tracing::warn!("memory backend selected: entries are lost when the process exits");
    }
}
