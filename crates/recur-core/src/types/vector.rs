//! Feature vectors
//!
//! A `FeatureVector` is a flat key/value mapping produced by the
//! analyzers. Each analyzer owns a disjoint key namespace; the merge
//! operation enforces that contract defensively by rejecting duplicate
//! keys instead of silently overwriting them.

use crate::error::{CoreError, Result};
use crate::types::value::FeatureValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A flat mapping of feature keys to values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector {
    entries: HashMap<String, FeatureValue>,
}

impl FeatureVector {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a feature, rejecting duplicate keys.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FeatureValue>) -> Result<()> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(CoreError::DuplicateFeature(key));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    /// Union with another vector; key collisions are an error.
    pub fn merge(&mut self, other: FeatureVector) -> Result<()> {
        for (key, value) in other.entries {
            if self.entries.contains_key(&key) {
                return Err(CoreError::DuplicateFeature(key));
            }
            self.entries.insert(key, value);
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize the vector as a JSON object for downstream consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl IntoIterator for FeatureVector {
    type Item = (String, FeatureValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
