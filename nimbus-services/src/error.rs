//! Error types for the platform service contracts.
//!
//! One family per service. Every type carries a human-readable message;
//! where the platform chains an underlying fault, it travels as a `source`.
//! No retry or recovery policy is implied: callers propagate or handle per
//! their own logic.

use thiserror::Error;

/// Result type for datastore operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors from the datastore contract.
#[derive(Debug, Error)]
pub enum DataError {
    /// The schema does not exist, or the condition/update/record shape is
    /// incompatible with its declared form.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// The datastore could not be reached or reported a backend fault.
    #[error("datastore error: {message}")]
    Datastore {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DataError {
    /// A datastore fault with no underlying cause.
    pub fn datastore(message: impl Into<String>) -> Self {
        Self::Datastore {
            message: message.into(),
            source: None,
        }
    }

    /// A datastore fault chaining the underlying cause.
    pub fn datastore_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Datastore {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// An error queueing or delivering a push notification.
#[derive(Debug, Error)]
#[error("push service error: {message}")]
pub struct PushError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PushError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for caching operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors from the caching contract.
///
/// Note that a missing value is not an error: lookups return `Ok(None)`
/// whether the key was never set or was evicted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// The cache did not answer within the platform's deadline.
    #[error("cache operation timed out")]
    Timeout,

    /// The caller exhausted its cache operation budget.
    #[error("cache rate limit exceeded")]
    RateLimited,

    /// The key exceeds the platform's key size limit.
    #[error("cache key is {len} bytes, limit is {max}")]
    KeyTooLarge { len: usize, max: usize },

    /// The value exceeds the platform's value size limit.
    #[error("cache value is {len} bytes, limit is {max}")]
    ValueTooLarge { len: usize, max: usize },

    /// The requested time-to-live exceeds the platform's maximum.
    #[error("requested ttl of {requested_ms} ms exceeds maximum of {max_ms} ms")]
    TtlTooLarge { requested_ms: u64, max_ms: u64 },
}

/// Result type for outbound HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors from the HTTP egress contract.
///
/// `RateLimited` and `NotWhitelisted` are the two specific shapes of access
/// denial; `AccessDenied` covers every other refusal by the egress
/// environment. [`HttpError::is_access_denied`] groups all three.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    /// The egress environment refused the request.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// The caller exhausted its outbound request budget.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The target domain is not on the egress whitelist.
    #[error("domain not whitelisted: {0}")]
    NotWhitelisted(String),

    /// The remote end did not answer within the deadline.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
}

impl HttpError {
    /// True for every flavor of egress denial.
    pub fn is_access_denied(&self) -> bool {
        matches!(
            self,
            Self::AccessDenied(_) | Self::RateLimited(_) | Self::NotWhitelisted(_)
        )
    }
}

/// An authentication or backend error in the Facebook service.
#[derive(Debug, Error)]
#[error("facebook service error: {message}")]
pub struct FacebookError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FacebookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// An authentication or backend error in the Twitter service.
#[derive(Debug, Error)]
#[error("twitter service error: {message}")]
pub struct TwitterError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TwitterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// A failure looking up a configuration variable.
#[derive(Debug, Error)]
#[error("config var service error: {message}")]
pub struct ConfigVarError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConfigVarError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// A service was requested before being activated for the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the {service} service has not been activated for this application")]
pub struct ServiceNotActivatedError {
    /// The name of the service that is not activated.
    pub service: String,
}

impl ServiceNotActivatedError {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }
}
