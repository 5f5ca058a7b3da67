//! Interface de linha de comando do modelmetrics.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::category::ModelCategory;
use crate::types::identity::{DatasetRef, ModelRef};

/// modelmetrics - cache de métricas de avaliação por checksum.
#[derive(Parser, Debug)]
#[command(name = "modelmetrics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "modelmetrics.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Identidades e checksums de um par (modelo, dataset).
#[derive(Args, Debug, Clone)]
pub struct PairArgs {
    /// Identidade do modelo.
    #[arg(long)]
    pub model: String,

    /// Checksum atual do modelo.
    #[arg(long, allow_hyphen_values = true)]
    pub model_checksum: i64,

    /// Identidade do dataset.
    #[arg(long)]
    pub dataset: String,

    /// Checksum atual do dataset.
    #[arg(long, allow_hyphen_values = true)]
    pub dataset_checksum: i64,
}

impl PairArgs {
    /// Monta as referências de modelo e dataset.
    pub fn to_refs(&self, category: ModelCategory) -> (ModelRef, DatasetRef) {
        (
            ModelRef::new(self.model.as_str(), self.model_checksum, category),
            DatasetRef::new(self.dataset.as_str(), self.dataset_checksum),
        )
    }
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra a chave de cache de um par.
    Key {
        #[command(flatten)]
        pair: PairArgs,
    },

    /// Grava métricas de um par no store.
    Put {
        #[command(flatten)]
        pair: PairArgs,

        /// Categoria do modelo.
        #[arg(long, default_value = "unknown")]
        category: ModelCategory,

        /// Duração total da avaliação (ms).
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        duration_ms: i64,

        /// Tempo de scoring (ms).
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        scoring_time_ms: i64,

        /// Arquivo JSON com o payload (auc, confusion_matrix).
        #[arg(long)]
        payload: Option<PathBuf>,
    },

    /// Busca métricas de um par no store.
    Get {
        #[command(flatten)]
        pair: PairArgs,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Mostra versão.
    Version,
}
