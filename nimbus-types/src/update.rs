//! Update actions applied to a stored record.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// One instruction applied to a record during an update.
///
/// The enum is non-exhaustive: the platform may grow additional action kinds
/// without breaking existing modules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum UpdateAction {
    /// Set `field` to `value`, replacing whatever was stored.
    Set { field: String, value: Value },
}

impl UpdateAction {
    /// Sets `field` to `value`.
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Set {
            field: field.into(),
            value: value.into(),
        }
    }
}
