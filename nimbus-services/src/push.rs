//! Push notification contract.

use crate::error::{DataResult, PushError};
use nimbus_types::{PushPayload, PushPlatform, PushToken};
use std::collections::HashMap;

/// Push notification delivery and the device token registry.
///
/// Delivery is payload-size arbitrated per device class: payloads up to
/// [`PushPayload::FULL_DELIVERY_LIMIT`] bytes reach every class in full,
/// payloads up to [`PushPayload::DEGRADED_DELIVERY_LIMIT`] bytes are
/// delivered degraded where the class allows it, and larger payloads are
/// rejected. The platform enforces this at send time;
/// [`PushService::eligible_platforms`] is the advisory pre-check.
///
/// Registry operations run against the datastore and report datastore
/// failures rather than push failures.
pub trait PushService: Send + Sync {
    /// Sends the payload to the devices identified by the tokens. Tokens
    /// must have been registered before they can be targeted.
    fn send_to_tokens(&self, tokens: &[PushToken], payload: &PushPayload) -> Result<(), PushError>;

    /// Sends the payload to every device registered to the given users.
    fn send_to_users(&self, users: &[String], payload: &PushPayload) -> Result<(), PushError>;

    /// Sends the payload to every device registered for this application.
    fn broadcast(&self, payload: &PushPayload) -> Result<(), PushError>;

    /// Reports which device classes the payload could currently reach,
    /// given its encoded size. Advisory only; the authoritative check
    /// happens when a send is queued.
    fn eligible_platforms(&self, payload: &PushPayload) -> Result<Vec<PushPlatform>, PushError>;

    /// Registers a token, optionally associating it with a user. A token
    /// registered without a user can still be targeted directly.
    fn register_token(&self, user: Option<&str>, token: &PushToken) -> DataResult<()>;

    /// Removes a token from the registry.
    fn remove_token(&self, token: &PushToken) -> DataResult<()>;

    /// Finds the registered, unexpired tokens for the given users. Users
    /// with no registered token are absent from the returned map.
    fn tokens_for_users(&self, users: &[String]) -> DataResult<HashMap<String, Vec<PushToken>>>;

    /// Returns the tokens reported expired by the device feedback services,
    /// mapped to their expiry time in milliseconds since the Unix epoch.
    /// When `clear` is true the platform forgets the set after reporting it.
    fn expired_tokens(&self, clear: bool) -> DataResult<HashMap<String, i64>>;
}
