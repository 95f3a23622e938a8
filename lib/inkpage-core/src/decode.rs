//! Path-aware JSON decoding of response bodies.

use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{Error, Result};

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the exact field that failed
/// to deserialize (e.g. `pages[2].image.path`).
///
/// # Errors
///
/// Returns [`Error::MalformedPayload`] if the bytes are not JSON or do not
/// match the shape of `T`.
///
/// # Example
///
/// ```
/// use inkpage_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Genre { name: String }
///
/// let genres: Vec<Genre> = from_json(br#"[{"name":"Action"}]"#).expect("deserialize");
/// assert_eq!(genres, vec![Genre { name: "Action".to_string() }]);
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        Error::malformed_payload(e.path().to_string(), e.inner().to_string())
    })?;
    deserializer
        .end()
        .map_err(|e| Error::malformed_payload(".", e.to_string()))?;
    Ok(value)
}

/// A validated, typed view of a JSON payload that still carries the exact
/// JSON it was read from.
///
/// Serializing a `Decoded<T>` writes the original JSON back unchanged, so the
/// typed view never normalizes what the backend sent (number formatting,
/// UUID case, absent versus `null` fields).
///
/// # Example
///
/// ```
/// use inkpage_core::Decoded;
///
/// #[derive(Debug, serde::Deserialize, garde::Validate)]
/// struct Rating {
///     #[garde(range(min = 0.0, max = 10.0))]
///     rating: f64,
/// }
///
/// let decoded: Decoded<Rating> = Decoded::from_slice(br#"{"rating": 7}"#).expect("decode");
/// assert_eq!(decoded.rating, 7.0);
/// assert_eq!(serde_json::to_string(&decoded).expect("encode"), r#"{"rating":7}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    raw: Value,
    view: T,
}

impl<T> Decoded<T>
where
    T: DeserializeOwned + garde::Validate,
    T::Context: Default,
{
    /// Decode and validate a response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] if the bytes are not JSON, do not
    /// match the shape of `T`, or fail validation.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_value(from_json(bytes)?)
    }

    /// Read and validate the typed view of `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] if `raw` does not match the shape
    /// of `T` or fails validation.
    pub fn from_value(raw: Value) -> Result<Self> {
        let view: T = serde_path_to_error::deserialize(&raw).map_err(|e| {
            Error::malformed_payload(e.path().to_string(), e.inner().to_string())
        })?;
        view.validate()?;
        Ok(Self { raw, view })
    }
}

impl<T> Decoded<T> {
    /// The JSON as received.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume into the JSON as received.
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Consume into the typed view.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.view
    }
}

impl<T> Deref for Decoded<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.view
    }
}

impl<T> Serialize for Decoded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Decoded<T>
where
    T: DeserializeOwned + garde::Validate,
    T::Context: Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_value(raw).map_err(D::Error::custom)
    }
}
