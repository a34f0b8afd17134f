use serde_json::{Map, Value};

use crate::errors::{StoreError, StoreResult};

/// Key/value pairs submitted in a single `set` call.
///
/// Only a JSON object is accepted; anything else is `InvalidInput`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pairs(Map<String, Value>);

impl Pairs {
    pub fn new() -> Self { Self::default() }

    /// Parse a raw request body.
    pub fn from_slice(bytes: &[u8]) -> StoreResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| StoreError::InvalidInput(e.to_string()))?;
        Self::try_from(value)
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl TryFrom<Value> for Pairs {
    type Error = StoreError;

    fn try_from(value: Value) -> StoreResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(StoreError::InvalidInput(format!(
                "expected a JSON object of key/value pairs, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Pairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Pairs {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
