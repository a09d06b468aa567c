//! Feature-engine error types

use recur_core::CoreError;
use thiserror::Error;

/// Feature extraction error
#[derive(Error, Debug)]
pub enum FeatureError {
    /// Error from the core type layer (date parsing, key collisions)
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for feature extraction
pub type Result<T> = std::result::Result<T, FeatureError>;
