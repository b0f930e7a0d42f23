use crate::types::SqlDialect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlMorphError {
    #[error("unsupported conversion: {source_dialect} to {target_dialect}")]
    UnsupportedConversion {
        source_dialect: SqlDialect,
        target_dialect: SqlDialect,
    },

    #[error("completion request failed: {0}")]
    Completion(String),

    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SqlMorphError>;
