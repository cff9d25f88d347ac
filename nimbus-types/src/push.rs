//! Push notification tokens and payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The device class a push token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushPlatform {
    Ios,
    Android,
    AndroidGcm,
}

/// An opaque device identifier tagged with its platform.
///
/// Token expiry is tracked platform-side; see
/// `PushService::expired_tokens`, which maps tokens to expiry timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PushToken {
    pub token: String,
    pub platform: PushPlatform,
}

impl PushToken {
    /// Creates a token for the given platform.
    pub fn new(token: impl Into<String>, platform: PushPlatform) -> Self {
        Self {
            token: token.into(),
            platform,
        }
    }

    /// Shorthand for an iOS token.
    pub fn ios(token: impl Into<String>) -> Self {
        Self::new(token, PushPlatform::Ios)
    }

    /// Shorthand for a legacy Android token.
    pub fn android(token: impl Into<String>) -> Self {
        Self::new(token, PushPlatform::Android)
    }

    /// Shorthand for an Android GCM token.
    pub fn android_gcm(token: impl Into<String>) -> Self {
        Self::new(token, PushPlatform::AndroidGcm)
    }
}

/// A push notification payload: flat string key/value pairs.
///
/// Device classes cap the encoded payload size. Up to
/// [`PushPayload::FULL_DELIVERY_LIMIT`] bytes every platform delivers the
/// payload in full; up to [`PushPayload::DEGRADED_DELIVERY_LIMIT`] bytes
/// some platforms truncate or drop fields; beyond that the platform rejects
/// the send. The limits are enforced by the platform at send time, not by
/// this type; use `PushService::eligible_platforms` to pre-check a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PushPayload(BTreeMap<String, String>);

impl PushPayload {
    /// Encoded size up to which every device class delivers in full.
    pub const FULL_DELIVERY_LIMIT: usize = 256;

    /// Encoded size up to which delivery is degraded but attempted.
    pub const DEGRADED_DELIVERY_LIMIT: usize = 1024;

    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one key/value pair, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts one key/value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Looks up one value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the payload carries no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for PushPayload {
    fn from(pairs: BTreeMap<String, String>) -> Self {
        Self(pairs)
    }
}

impl FromIterator<(String, String)> for PushPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
