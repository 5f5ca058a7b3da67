//! Identidades e contratos dos colaboradores (modelo e dataset).
//!
//! O cache não sabe nada sobre como um modelo é treinado ou como um
//! dataset é armazenado: só precisa de uma identidade opaca e de um
//! checksum que muda quando o estado muda.

use serde::{Deserialize, Serialize};

use super::category::ModelCategory;

/// Referência opaca a um modelo ou dataset.
///
/// A forma textual é exatamente a string encapsulada.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Cria uma nova identidade.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Retorna a forma textual da identidade.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Contrato exigido de um modelo treinado.
pub trait Model {
    /// Identidade do modelo.
    fn identity(&self) -> &Identity;

    /// Checksum do estado atual do modelo.
    fn checksum(&self) -> i64;

    /// Categoria do modelo.
    fn category(&self) -> ModelCategory;
}

/// Contrato exigido de um dataset.
pub trait Dataset {
    /// Identidade do dataset.
    fn identity(&self) -> &Identity;

    /// Checksum do estado atual do dataset.
    fn checksum(&self) -> i64;
}

/// Modelo descrito apenas pelos dados que o cache consome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    pub identity: Identity,
    pub checksum: i64,
    #[serde(default)]
    pub category: ModelCategory,
}

impl ModelRef {
    /// Cria uma nova referência de modelo.
    pub fn new(identity: impl Into<Identity>, checksum: i64, category: ModelCategory) -> Self {
        Self {
            identity: identity.into(),
            checksum,
            category,
        }
    }
}

impl Model for ModelRef {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn checksum(&self) -> i64 {
        self.checksum
    }

    fn category(&self) -> ModelCategory {
        self.category
    }
}

/// Dataset descrito apenas pelos dados que o cache consome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRef {
    pub identity: Identity,
    pub checksum: i64,
}

impl DatasetRef {
    /// Cria uma nova referência de dataset.
    pub fn new(identity: impl Into<Identity>, checksum: i64) -> Self {
        Self {
            identity: identity.into(),
            checksum,
        }
    }
}

impl Dataset for DatasetRef {
    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn checksum(&self) -> i64 {
        self.checksum
    }
}
