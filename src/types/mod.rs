//! Tipos compartilhados do modelmetrics.

pub mod category;
pub mod config;
pub mod errors;
pub mod identity;

pub use category::ModelCategory;
pub use identity::{Dataset, DatasetRef, Identity, Model, ModelRef};
