//! Error types for RECUR Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid transaction date '{value}': {source}")]
    DateFormat {
        value: String,
        source: chrono::format::ParseError,
    },

    #[error("Duplicate feature key: {0}")]
    DuplicateFeature(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
