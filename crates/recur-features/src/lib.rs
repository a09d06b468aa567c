//! RECUR Features - recurring-transaction feature extraction
//!
//! This crate computes a fixed-shape feature vector describing whether
//! a transaction is likely part of a recurring series (subscription,
//! bill, transfer), given that transaction and the full history of
//! transactions for its owner. The vector is consumed by an external
//! classifier.
//!
//! All analyzers are pure functions of `(transaction, history)`; the
//! [`FeatureExtractor`] is the only orchestrator.

pub mod analyzers;
pub mod error;
pub mod extractor;
pub mod history;
pub mod knowledge;
pub mod stats;

// Re-export main types
pub use error::{FeatureError, Result};
pub use extractor::{FeatureExtractor, FEATURE_KEYS};
pub use knowledge::{AmountRule, VendorKnowledge};
