//! Per-request options handed to the transport.

use crate::error::{AuthError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the nested headers mapping.
pub const HEADERS_KEY: &str = "headers";
/// Header entry populated by authentication strategies.
pub const AUTHENTICATE_KEY: &str = "authenticate";

/// Mutable per-request configuration (headers, timeout, ...).
///
/// Strategies only ever write `headers.authenticate`; every other key is
/// left as the caller set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestOptions(Map<String, Value>);

impl RequestOptions {
    /// Create options holding an empty `headers` mapping.
    pub fn new() -> Self {
        let mut map = Map::new();
        map.insert(HEADERS_KEY.to_string(), Value::Object(Map::new()));
        Self(map)
    }

    /// Wrap an existing mapping as-is.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a top-level option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// The `headers` mapping, if present and well-formed.
    pub fn headers(&self) -> Option<&Map<String, Value>> {
        self.0.get(HEADERS_KEY).and_then(Value::as_object)
    }

    /// Mutable access to `headers`. The mapping is never created here.
    pub fn headers_mut(&mut self) -> Result<&mut Map<String, Value>> {
        match self.0.get_mut(HEADERS_KEY) {
            Some(Value::Object(headers)) => Ok(headers),
            Some(_) => Err(AuthError::InvalidHeaders),
            None => Err(AuthError::MissingHeaders),
        }
    }

    /// The current `headers.authenticate` payload.
    pub fn authenticate(&self) -> Option<&Value> {
        self.headers().and_then(|h| h.get(AUTHENTICATE_KEY))
    }

    /// Overwrite `headers.authenticate`.
    pub fn set_authenticate(&mut self, payload: Value) -> Result<()> {
        self.headers_mut()?
            .insert(AUTHENTICATE_KEY.to_string(), payload);
        Ok(())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Same as [`RequestOptions::from_map`].
impl From<Map<String, Value>> for RequestOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl TryFrom<Value> for RequestOptions {
    type Error = AuthError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(AuthError::InvalidOptions),
        }
    }
}
