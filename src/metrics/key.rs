//! Geração de chaves de cache para métricas.

use serde::{Deserialize, Serialize};

use crate::types::identity::{Dataset, Identity, Model};

/// Prefixo fixo de todas as chaves de métricas.
pub const KEY_PREFIX: &str = "modelmetrics_";

/// Forma textual de uma identidade não definida.
const UNSET_IDENTITY: &str = "null";

/// Chave de cache de um par (modelo, dataset).
///
/// Formato: `modelmetrics_<modelo>@<checksum>_on_<dataset>@<checksum>`.
/// Esse formato é persistido no store e precisa ser reproduzido byte a byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsKey(String);

impl MetricsKey {
    /// Constrói a chave a partir das identidades e checksums.
    ///
    /// Identidades ausentes são escritas como `null`.
    ///
    /// O formato não escapa as identidades: se elas contêm `@` ou `_on_`,
    /// pares diferentes podem produzir a mesma chave (ex.: `X@5_on_Y`@5 em
    /// `Z`@5 e `X`@5 em `Y@5_on_Z`@5). Quem busca deve conferir as
    /// identidades do registro, como faz `MetricsCache::get_valid`.
    pub fn build(
        model: Option<&Identity>,
        model_checksum: i64,
        dataset: Option<&Identity>,
        dataset_checksum: i64,
    ) -> Self {
        let model = model.map(Identity::as_str).unwrap_or(UNSET_IDENTITY);
        let dataset = dataset.map(Identity::as_str).unwrap_or(UNSET_IDENTITY);

        Self(format!(
            "{}{}@{}_on_{}@{}",
            KEY_PREFIX, model, model_checksum, dataset, dataset_checksum
        ))
    }

    /// Constrói a chave a partir do estado atual de um modelo e de um dataset.
    pub fn for_pair<M: Model + ?Sized, D: Dataset + ?Sized>(model: &M, dataset: &D) -> Self {
        Self::build(
            Some(model.identity()),
            model.checksum(),
            Some(dataset.identity()),
            dataset.checksum(),
        )
    }

    /// Retorna a chave como string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MetricsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MetricsKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
