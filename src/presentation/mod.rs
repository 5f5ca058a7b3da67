//! Visões externas de um registro de métricas.
//!
//! A conversão é de mão única: este módulo conhece [`ModelMetrics`],
//! o núcleo não conhece nenhuma visão.

use serde::{Deserialize, Serialize};

use crate::metrics::{EvaluationPayload, ModelMetrics};
use crate::types::category::ModelCategory;

/// Conversão de um registro para uma representação externa.
pub trait MetricsView: Sized {
    /// Constrói a visão a partir do registro.
    fn render(record: &ModelMetrics) -> Self;
}

/// Visão padrão, serializável para JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub key: String,
    pub fingerprint: String,
    pub combined_checksum: i64,
    pub model: Option<String>,
    pub model_checksum: i64,
    pub model_category: Option<ModelCategory>,
    pub dataset: Option<String>,
    pub dataset_checksum: i64,
    pub duration_ms: Option<i64>,
    pub scoring_time_ms: Option<i64>,
    pub payload: EvaluationPayload,
}

impl MetricsView for MetricsSummary {
    fn render(record: &ModelMetrics) -> Self {
        Self {
            key: record.key().to_string(),
            fingerprint: record.fingerprint(),
            combined_checksum: record.checksum(),
            model: record.model().map(|m| m.to_string()),
            model_checksum: record.model_checksum(),
            model_category: record.model_category(),
            dataset: record.dataset().map(|d| d.to_string()),
            dataset_checksum: record.dataset_checksum(),
            duration_ms: record.duration_ms(),
            scoring_time_ms: record.scoring_time_ms(),
            payload: record.payload().clone(),
        }
    }
}

/// Formata um registro para exibição em terminal.
pub fn format_summary(summary: &MetricsSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Key:         {}\n", summary.key));
    output.push_str(&format!(
        "Model:       {} (checksum {}, {})\n",
        summary.model.as_deref().unwrap_or("-"),
        summary.model_checksum,
        summary
            .model_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "Dataset:     {} (checksum {})\n",
        summary.dataset.as_deref().unwrap_or("-"),
        summary.dataset_checksum
    ));
    output.push_str(&format!("Combined:    {}\n", summary.combined_checksum));
    output.push_str(&format!("Fingerprint: {}\n", summary.fingerprint));
    output.push_str(&format!("Duration:    {}\n", format_ms(summary.duration_ms)));
    output.push_str(&format!("Scoring:     {}\n", format_ms(summary.scoring_time_ms)));

    if let Some(auc) = &summary.payload.auc {
        output.push_str(&format!("AUC:         {}\n", auc));
    }
    if let Some(cm) = &summary.payload.confusion_matrix {
        output.push_str(&format!("Confusion:   {}\n", cm));
    }

    output
}

fn format_ms(value: Option<i64>) -> String {
    value
        .map(|ms| format!("{} ms", ms))
        .unwrap_or_else(|| "n/a".to_string())
}
