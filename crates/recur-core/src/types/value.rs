//! Feature values
//!
//! The `FeatureValue` enum represents a single entry in a feature
//! vector: counts and flags are integers, statistics and ratios are
//! floats, and two keys carry short categorical labels.

use serde::{Deserialize, Serialize};

/// A single feature value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Integer value (counts, 0/1 flags, day indices)
    Int(i64),
    /// Floating point value (means, deviations, rates)
    Float(f64),
    /// Categorical label (`subscription_tier`, `vendor_category`)
    Text(String),
}

impl FeatureValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FeatureValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(n) => Some(*n as f64),
            FeatureValue::Float(f) => Some(*f),
            FeatureValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FeatureValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for FeatureValue {
    fn from(n: i64) -> Self {
        FeatureValue::Int(n)
    }
}

impl From<bool> for FeatureValue {
    fn from(flag: bool) -> Self {
        FeatureValue::Int(flag as i64)
    }
}

impl From<f64> for FeatureValue {
    fn from(f: f64) -> Self {
        FeatureValue::Float(f)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        FeatureValue::Text(s.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        FeatureValue::Text(s)
    }
}
