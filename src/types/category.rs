//! Categoria do modelo avaliado.

use serde::{Deserialize, Serialize};

/// Classificação do tipo de modelo que produziu um resultado.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelCategory {
    /// Categoria desconhecida.
    #[default]
    Unknown,
    /// Classificação binária.
    Binomial,
    /// Classificação multiclasse.
    Multinomial,
    /// Regressão.
    Regression,
    /// Clusterização.
    Clustering,
    /// Autoencoder.
    AutoEncoder,
    /// Redução de dimensionalidade.
    DimReduction,
}

impl std::fmt::Display for ModelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelCategory::Unknown => write!(f, "unknown"),
            ModelCategory::Binomial => write!(f, "binomial"),
            ModelCategory::Multinomial => write!(f, "multinomial"),
            ModelCategory::Regression => write!(f, "regression"),
            ModelCategory::Clustering => write!(f, "clustering"),
            ModelCategory::AutoEncoder => write!(f, "auto_encoder"),
            ModelCategory::DimReduction => write!(f, "dim_reduction"),
        }
    }
}

impl std::str::FromStr for ModelCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "unknown" => Ok(ModelCategory::Unknown),
            "binomial" => Ok(ModelCategory::Binomial),
            "multinomial" => Ok(ModelCategory::Multinomial),
            "regression" => Ok(ModelCategory::Regression),
            "clustering" => Ok(ModelCategory::Clustering),
            "auto_encoder" | "autoencoder" => Ok(ModelCategory::AutoEncoder),
            "dim_reduction" | "dimreduction" => Ok(ModelCategory::DimReduction),
            other => Err(format!("categoria de modelo desconhecida: {}", other)),
        }
    }
}
