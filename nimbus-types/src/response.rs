//! The outcome a custom method hands back to the platform.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The result payload of a custom method: string keys to nested values.
/// The platform renders this map to JSON when answering the API call.
pub type ResponseBody = BTreeMap<String, Value>;

/// An HTTP status code paired with a result payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseToProcess {
    /// The HTTP status code to answer with.
    pub code: u16,
    /// The result payload, rendered to JSON by the platform.
    pub body: ResponseBody,
}

impl ResponseToProcess {
    /// Creates a response with the given status code and payload.
    pub fn new(code: u16, body: ResponseBody) -> Self {
        Self { code, body }
    }

    /// Creates a response with the given status code and an empty payload.
    pub fn with_code(code: u16) -> Self {
        Self::new(code, ResponseBody::new())
    }

    /// Creates a `200 OK` response with the given payload.
    pub fn ok(body: ResponseBody) -> Self {
        Self::new(200, body)
    }

    /// Adds one key/value pair to the payload.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }
}
