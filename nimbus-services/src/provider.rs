//! The per-request service provider.

use crate::cache::CachingService;
use crate::config::ConfigVarService;
use crate::data::DataService;
use crate::error::ServiceNotActivatedError;
use crate::http::HttpService;
use crate::logger::LoggerService;
use crate::push::PushService;
use crate::social::{FacebookService, TwitterService};

/// Access to every platform capability, handed to a custom method alongside
/// the processed request.
///
/// The datastore, cache, config variables, and logger are available to every
/// application. Push, Facebook, Twitter, and outbound HTTP must be activated
/// in the platform console first; their accessors fail with
/// [`ServiceNotActivatedError`] until then.
pub trait ServiceProvider: Send + Sync {
    /// The datastore for the current application.
    fn data_service(&self) -> &dyn DataService;

    /// The best-effort key/value cache.
    fn caching_service(&self) -> &dyn CachingService;

    /// The application's configuration variables.
    fn config_var_service(&self) -> &dyn ConfigVarService;

    /// The request-scoped logger.
    fn logger_service(&self) -> &dyn LoggerService;

    /// The push notification service, if activated.
    fn push_service(&self) -> Result<&dyn PushService, ServiceNotActivatedError>;

    /// The Facebook service, if activated.
    fn facebook_service(&self) -> Result<&dyn FacebookService, ServiceNotActivatedError>;

    /// The Twitter service, if activated.
    fn twitter_service(&self) -> Result<&dyn TwitterService, ServiceNotActivatedError>;

    /// The outbound HTTP service, if activated.
    fn http_service(&self) -> Result<&dyn HttpService, ServiceNotActivatedError>;

    /// Whether this invocation runs in the sandbox environment rather than
    /// production.
    fn is_sandbox(&self) -> bool;

    /// The platform-assigned version string of the deployed module build.
    fn module_version(&self) -> &str;
}
