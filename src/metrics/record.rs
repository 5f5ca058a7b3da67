//! Registro imutável com as métricas de um modelo avaliado em um dataset.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::checksum;
use super::key::MetricsKey;
use crate::types::category::ModelCategory;
use crate::types::identity::{Dataset, Identity, Model};

/// Valor sentinela de medições de tempo ainda não preenchidas.
pub const UNSET: i64 = -1;

/// Resultado opaco produzido pelo colaborador de scoring.
///
/// O cache armazena e devolve esses dados sem interpretá-los.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPayload {
    /// Estatísticas de curva (AUC, thresholds, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auc: Option<serde_json::Value>,

    /// Matriz de confusão.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confusion_matrix: Option<serde_json::Value>,
}

impl EvaluationPayload {
    /// Cria um payload vazio.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Define os dados de AUC.
    pub fn with_auc(mut self, auc: serde_json::Value) -> Self {
        self.auc = Some(auc);
        self
    }

    /// Define a matriz de confusão.
    pub fn with_confusion_matrix(mut self, cm: serde_json::Value) -> Self {
        self.confusion_matrix = Some(cm);
        self
    }

    /// Indica se nenhum dado foi fornecido.
    pub fn is_empty(&self) -> bool {
        self.auc.is_none() && self.confusion_matrix.is_none()
    }
}

/// Métricas de um modelo avaliado em um dataset específico.
///
/// Os campos são definidos uma única vez na construção. Um registro
/// "alterado" é um novo registro gravado sob a mesma chave ou outra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    model: Option<Identity>,
    model_checksum: i64,
    model_category: Option<ModelCategory>,
    dataset: Option<Identity>,
    dataset_checksum: i64,
    duration_ms: i64,
    scoring_time_ms: i64,
    #[serde(default)]
    payload: EvaluationPayload,
}

impl Default for ModelMetrics {
    fn default() -> Self {
        Self {
            model: None,
            model_checksum: UNSET,
            model_category: None,
            dataset: None,
            dataset_checksum: UNSET,
            duration_ms: UNSET,
            scoring_time_ms: UNSET,
            payload: EvaluationPayload::default(),
        }
    }
}

impl ModelMetrics {
    /// Cria um registro a partir do estado atual do modelo e do dataset.
    ///
    /// Identidades, checksums e categoria são lidos neste momento: mudanças
    /// posteriores no modelo ou no dataset não alteram o registro.
    pub fn new<M, D>(
        model: &M,
        dataset: &D,
        duration_ms: i64,
        scoring_time_ms: i64,
        payload: EvaluationPayload,
    ) -> Self
    where
        M: Model + ?Sized,
        D: Dataset + ?Sized,
    {
        Self {
            model: Some(model.identity().clone()),
            model_checksum: model.checksum(),
            model_category: Some(model.category()),
            dataset: Some(dataset.identity().clone()),
            dataset_checksum: dataset.checksum(),
            duration_ms,
            scoring_time_ms,
            payload,
        }
    }

    /// Cria um registro sem medições de tempo nem payload.
    pub fn snapshot<M, D>(model: &M, dataset: &D) -> Self
    where
        M: Model + ?Sized,
        D: Dataset + ?Sized,
    {
        Self::new(model, dataset, UNSET, UNSET, EvaluationPayload::empty())
    }

    /// Chave sob a qual este registro é armazenado.
    pub fn key(&self) -> MetricsKey {
        MetricsKey::build(
            self.model.as_ref(),
            self.model_checksum,
            self.dataset.as_ref(),
            self.dataset_checksum,
        )
    }

    /// Checksum combinado (com perda) do modelo e do dataset.
    ///
    /// Não use para comparar identidades; veja [`Self::is_for_model`].
    pub fn checksum(&self) -> i64 {
        checksum::combine(self.model_checksum, self.dataset_checksum)
    }

    /// Fingerprint SHA-256 (hex) da chave do registro.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.key().as_str().as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Verifica se o registro ainda corresponde ao estado atual do modelo.
    pub fn is_for_model<M: Model + ?Sized>(&self, model: &M) -> bool {
        self.model.is_some() && self.model_checksum == model.checksum()
    }

    /// Verifica se o registro ainda corresponde ao estado atual do dataset.
    pub fn is_for_dataset<D: Dataset + ?Sized>(&self, dataset: &D) -> bool {
        self.dataset.is_some() && self.dataset_checksum == dataset.checksum()
    }

    pub fn model(&self) -> Option<&Identity> {
        self.model.as_ref()
    }

    pub fn model_checksum(&self) -> i64 {
        self.model_checksum
    }

    pub fn model_category(&self) -> Option<ModelCategory> {
        self.model_category
    }

    pub fn dataset(&self) -> Option<&Identity> {
        self.dataset.as_ref()
    }

    pub fn dataset_checksum(&self) -> i64 {
        self.dataset_checksum
    }

    /// Duração total da avaliação, ou `None` se não medida.
    pub fn duration_ms(&self) -> Option<i64> {
        (self.duration_ms != UNSET).then_some(self.duration_ms)
    }

    /// Tempo gasto no scoring, ou `None` se não medido.
    pub fn scoring_time_ms(&self) -> Option<i64> {
        (self.scoring_time_ms != UNSET).then_some(self.scoring_time_ms)
    }

    pub fn payload(&self) -> &EvaluationPayload {
        &self.payload
    }
}
