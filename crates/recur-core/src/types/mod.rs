//! Type system for RECUR
//!
//! This module contains the data model of the engine:
//! - Transaction records
//! - Feature values
//! - Feature vectors

pub mod transaction;
pub mod value;
pub mod vector;

pub use transaction::Transaction;
pub use value::FeatureValue;
pub use vector::FeatureVector;
