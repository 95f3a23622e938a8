use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A post on the home page.
///
/// The backend owns this shape; the front-end passes it through untouched,
/// so it is kept as an opaque JSON object and any object is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, garde::Validate)]
#[serde(transparent)]
pub struct Post(#[garde(skip)] Map<String, Value>);

impl Post {
    /// Single field by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying JSON object.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Post {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
