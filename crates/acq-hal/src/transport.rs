//! The transport seam between the connector and the wire.
//!
//! Every service call is one of two shapes:
//!
//! ```text
//!   post(path, Payload { params, body }) ──→ Envelope
//!   get(path, Params)                    ──→ Envelope
//! ```
//!
//! A transport is responsible for session state (cookies, CSRF header),
//! the charset parameter, and for turning HTTP-level failures into
//! [`HalError`]. It returns the decoded [`Envelope`] untouched; the
//! connector decides what a failed envelope means.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HalError, HalResult};

/// Ordered query parameters.
///
/// Insertion order is kept so requests are reproducible in logs and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key`, replacing an earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Look up a parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Request content for a POST: query parameters and an optional JSON body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    /// Query parameters.
    pub params: Params,
    /// JSON body, sent with `Content-Type: application/json`.
    pub body: Option<Value>,
}

impl Payload {
    /// A payload carrying only a JSON body.
    pub fn json(body: Value) -> Self {
        Self {
            params: Params::new(),
            body: Some(body),
        }
    }

    /// A payload carrying only query parameters.
    pub fn params(params: Params) -> Self {
        Self { params, body: None }
    }
}

/// The `{success, data, exception, message}` wrapper around every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub exception: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// A successful envelope around `data`.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data,
            ..Self::default()
        }
    }

    /// A failed envelope carrying `exception`.
    pub fn failure(exception: impl Into<String>) -> Self {
        Self {
            success: false,
            exception: Some(exception.into()),
            ..Self::default()
        }
    }

    /// Unwrap `data`, failing with [`HalError::RequestFailed`] if the
    /// service reported `success: false`.
    pub fn into_data(self) -> HalResult<Value> {
        if self.success {
            Ok(self.data)
        } else {
            let message = self
                .exception
                .or(self.message)
                .unwrap_or_else(|| "service reported failure".to_string());
            Err(HalError::request_failed(message))
        }
    }

    /// Unwrap and deserialize `data`.
    pub fn data_as<T: DeserializeOwned>(self) -> HalResult<T> {
        Ok(serde_json::from_value(self.into_data()?)?)
    }
}

/// Moves requests to the service and brings envelopes back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST to `path` with the given parameters and body.
    async fn post(&self, path: &str, payload: Payload) -> HalResult<Envelope>;

    /// GET `path` with the given query parameters.
    async fn get(&self, path: &str, params: Params) -> HalResult<Envelope>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(&self, path: &str, payload: Payload) -> HalResult<Envelope> {
        (**self).post(path, payload).await
    }

    async fn get(&self, path: &str, params: Params) -> HalResult<Envelope> {
        (**self).get(path, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_keep_order_and_replace() {
        let mut params = Params::new().with("experimentId", 123).with("shots", 100);
        params.insert("experimentId", 124);

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, [("experimentId", "124"), ("shots", "100")]);
        assert_eq!(params.get("shots"), Some("100"));
        assert_eq!(params.get("seed"), None);
    }

    #[test]
    fn test_envelope_decodes_partial_body() {
        let env: Envelope = serde_json::from_value(json!({"success": true})).unwrap();
        assert!(env.success);
        assert_eq!(env.data, Value::Null);

        let env: Envelope = serde_json::from_value(json!({
            "success": false,
            "exception": "experiment not found",
            "message": null,
            "data": null
        }))
        .unwrap();
        assert_eq!(env.exception.as_deref(), Some("experiment not found"));
    }

    #[test]
    fn test_into_data_on_failure() {
        let err = Envelope::failure("boom").into_data().unwrap_err();
        assert!(matches!(
            err,
            HalError::RequestFailed { ref message, status: None } if message == "boom"
        ));

        let env = Envelope {
            message: Some("fallback".into()),
            ..Envelope::default()
        };
        assert!(env.into_data().unwrap_err().to_string().contains("fallback"));
    }

    #[test]
    fn test_data_as() {
        let id: u64 = Envelope::ok(json!(42)).data_as().unwrap();
        assert_eq!(id, 42);

        let err = Envelope::ok(json!("nope")).data_as::<u64>().unwrap_err();
        assert!(matches!(err, HalError::Serialization(_)));
    }
}
