//! Tipos de erro do modelmetrics.

use thiserror::Error;

/// Tipo de resultado padrão do modelmetrics.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Erros possíveis no modelmetrics.
///
/// Um cache miss nunca é um erro: `get` retorna `Ok(None)`.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store indisponível: {0}")]
    Store(String),

    #[cfg(feature = "sqlite")]
    #[error("Erro no banco SQLite: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("{0}")]
    Other(String),
}

impl MetricsError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro vindo do store externo.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::Store(msg.into())
    }
}
