//! Body of a failed backend response.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reason phrase for a status code, `"Unknown Status"` when it has none.
#[must_use]
pub fn status_text(status: u16) -> &'static str {
    http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status")
}

/// Loosely-typed JSON object describing why a request failed.
///
/// The backend usually answers with `{"error": "..."}`. When the body cannot
/// be read as JSON the payload is synthesized as `{"error": <status text>}`,
/// so a failed decode never hides the original failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorPayload(Map<String, Value>);

impl ErrorPayload {
    /// Payload carrying only the status text under `error`.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        Self::with_error(status_text(status))
    }

    /// Payload carrying `message` under `error`.
    #[must_use]
    pub fn with_error(message: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("error".to_string(), Value::String(message.into()));
        Self(map)
    }

    /// Decode a failed response body.
    ///
    /// - a JSON object is kept as is
    /// - a bare JSON string becomes `{"error": <string>}`
    /// - anything else falls back to [`ErrorPayload::from_status`]
    #[must_use]
    pub fn decode(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => Self(map),
            Ok(Value::String(message)) => Self::with_error(message),
            Ok(_) | Err(_) => Self::from_status(status),
        }
    }

    /// Human-readable message: the `error` field, else the `message` field.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        ["error", "message"]
            .iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }

    /// Single field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ErrorPayload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_json_object() {
        let payload = ErrorPayload::decode(404, br#"{"error": "not found", "code": 7}"#);

        check!(payload.message() == Some("not found"));
        check!(payload.get("code") == Some(&json!(7)));
    }

    #[test]
    fn message_key_is_secondary() {
        let payload = ErrorPayload::decode(400, br#"{"message": "bad slug"}"#);
        check!(payload.message() == Some("bad slug"));

        let payload = ErrorPayload::decode(400, br#"{"message": "second", "error": "first"}"#);
        check!(payload.message() == Some("first"));
    }

    #[test]
    fn non_json_body_uses_status_text() {
        let payload = ErrorPayload::decode(500, b"<h1>oops</h1>");
        check!(payload == ErrorPayload::with_error("Internal Server Error"));
    }

    #[test]
    fn empty_body_uses_status_text() {
        let payload = ErrorPayload::decode(404, b"");
        check!(payload.message() == Some("Not Found"));
    }

    #[test]
    fn bare_string_becomes_error_field() {
        let payload = ErrorPayload::decode(404, br#""user has no posts""#);
        check!(payload.message() == Some("user has no posts"));
    }

    #[test]
    fn other_json_values_use_status_text() {
        let payload = ErrorPayload::decode(503, b"[1, 2, 3]");
        check!(payload.message() == Some("Service Unavailable"));
    }

    #[test]
    fn unknown_status_text() {
        check!(status_text(599) == "Unknown Status");
        check!(status_text(418) == "I'm a teapot");
    }

    #[test]
    fn serializes_transparently() {
        let payload = ErrorPayload::with_error("not found");
        let value = serde_json::to_value(&payload).expect("serialize");
        check!(value == json!({"error": "not found"}));
    }
}
