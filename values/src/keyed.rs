//! FILENAME: values/src/keyed.rs
//! PURPOSE: An ordered mapping from unique string keys to nullable numbers.
//! CONTEXT: This file defines `KeyedValues`, the input and output type of
//! the cumulative-percentage computation. Storage pairs parallel key/value
//! vectors (insertion order) with a hash index for O(1) key lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use crate::error::DataError;

/// An ordered sequence of (key, value) pairs with unique string keys and
/// nullable numeric values.
///
/// Insertion order is preserved. Adding a value under an existing key
/// overwrites in place, keeping the key's original position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyedValues {
    /// Keys in insertion order.
    keys: Vec<String>,

    /// Values parallel to `keys`. `None` is a null value.
    values: Vec<Option<f64>>,

    /// Map from key to its position in `keys`/`values`.
    index: FxHashMap<String, usize>,
}

impl KeyedValues {
    /// Creates a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (key, value) pairs.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Appends a (key, value) pair, or overwrites the value in place if the
    /// key is already present (the key keeps its original position).
    ///
    /// An empty key fails with `InvalidArgument`.
    pub fn add_value(&mut self, key: &str, value: Option<f64>) -> Result<(), DataError> {
        if key.is_empty() {
            return Err(DataError::InvalidArgument(
                "key must not be empty".to_string(),
            ));
        }

        if let Some(&pos) = self.index.get(key) {
            self.values[pos] = value;
        } else {
            self.index.insert(key.to_string(), self.keys.len());
            self.keys.push(key.to_string());
            self.values.push(value);
        }
        Ok(())
    }

    /// Returns the value stored under `key`, or `KeyNotFound` if absent.
    pub fn value_for_key(&self, key: &str) -> Result<Option<f64>, DataError> {
        match self.index.get(key) {
            Some(&pos) => Ok(self.values[pos]),
            None => Err(DataError::KeyNotFound(key.to_string())),
        }
    }

    /// Returns the key at a position in insertion order.
    pub fn key_at(&self, index: usize) -> Result<&str, DataError> {
        self.keys
            .get(index)
            .map(|k| k.as_str())
            .ok_or_else(|| DataError::bad_index(index, self.keys.len()))
    }

    /// Returns the value at a position in insertion order.
    pub fn value_at(&self, index: usize) -> Result<Option<f64>, DataError> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| DataError::bad_index(index, self.values.len()))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Iterates over (key, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.keys
            .iter()
            .map(|k| k.as_str())
            .zip(self.values.iter().copied())
    }
}
