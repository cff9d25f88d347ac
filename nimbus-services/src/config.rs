//! Per-application configuration variables.

use crate::error::ConfigVarError;

/// Read access to the key/value configuration variables provisioned for
/// this application in the platform console.
pub trait ConfigVarService: Send + Sync {
    /// Looks up the value for `key`. An unprovisioned key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, ConfigVarError>;
}
