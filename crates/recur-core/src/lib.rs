//! RECUR Core - Core types for the RECUR feature-extraction engine
//!
//! This crate provides the fundamental types shared across the engine:
//! - `Transaction`, the input record
//! - `FeatureValue` and `FeatureVector`, the output types
//! - Error types

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use types::{FeatureValue, FeatureVector, Transaction};
