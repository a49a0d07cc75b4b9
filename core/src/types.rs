//! Domain DTOs for the message board API.
//!
//! # Design
//! These types mirror the reference server's schema but are defined
//! independently. Integration tests catch any drift between the two crates.

use serde::{Deserialize, Serialize};

/// A message as stored by the backend. The id is assigned server-side and
/// never changes once the client has received it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: i64,
    pub text: String,
}

/// Request payload for creating a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMessage {
    pub text: String,
}

/// Body of `GET /api/health`. Both fields are optional so an unexpected
/// health shape still decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
}

impl Health {
    /// Decode a health body leniently. Anything that isn't an object with
    /// string fields yields an empty `Health`.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let field = |name: &str| value.get(name).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            status: field("status"),
            service: field("service"),
        }
    }
}
