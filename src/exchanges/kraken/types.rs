use crate::core::errors::ExchangeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Ordered request parameters
///
/// Insertion order is the canonical order: the signer hashes and the
/// transport sends the same encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestParams {
    pairs: Vec<(String, String)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::set`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key, value);
        self
    }

    /// Replace the value of an existing key in place, or append a new one
    pub fn set(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(idx) => self.pairs[idx].1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` encoding in insertion order
    pub fn encode(&self) -> Result<String, ExchangeError> {
        serde_urlencoded::to_string(&self.pairs).map_err(|e| {
            ExchangeError::InvalidParameters(format!("Failed to encode form: {}", e))
        })
    }

    /// Inverse of [`Self::encode`]
    pub fn decode(encoded: &str) -> Result<Self, ExchangeError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(encoded).map_err(|e| {
            ExchangeError::InvalidParameters(format!("Failed to decode form: {}", e))
        })?;
        Ok(Self { pairs })
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for RequestParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}

/// Typed view of the response envelope
///
/// The client returns the whole parsed body; this struct is a convenience
/// for callers who want the two standard fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KrakenResponse {
    #[serde(default)]
    pub error: Vec<String>,
    #[serde(default)]
    pub result: Option<Value>,
}

impl KrakenResponse {
    pub fn from_value(value: Value) -> Result<Self, ExchangeError> {
        serde_json::from_value(value.clone()).map_err(|source| ExchangeError::Parse {
            body: value.to_string(),
            source,
        })
    }
}
