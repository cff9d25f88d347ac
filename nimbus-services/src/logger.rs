//! Request-scoped logging.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Logging surfaced in the platform console, attributed to the requesting
/// module and request.
///
/// Implementations provide [`log`](LoggerService::log); the per-level
/// conveniences delegate to it.
pub trait LoggerService: Send + Sync {
    /// Logs `message` at `level`, chaining `cause` when present.
    fn log(&self, level: LogLevel, message: &str, cause: Option<&(dyn Error + 'static)>);

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message, None);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, None);
    }

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, None);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, None);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, None);
    }

    fn trace_with(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Trace, message, Some(cause));
    }

    fn debug_with(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Debug, message, Some(cause));
    }

    fn info_with(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Info, message, Some(cause));
    }

    fn warn_with(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Warn, message, Some(cause));
    }

    fn error_with(&self, message: &str, cause: &(dyn Error + 'static)) {
        self.log(LogLevel::Error, message, Some(cause));
    }
}

/// [`LoggerService`] implementation forwarding to the `tracing` facade.
///
/// The platform installs its own subscriber in production; under test the
/// module author controls the subscriber, so log output is identical in
/// both environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LoggerService for TracingLogger {
    fn log(&self, level: LogLevel, message: &str, cause: Option<&(dyn Error + 'static)>) {
        match level {
            LogLevel::Trace => match cause {
                Some(err) => tracing::trace!(error = %err, "{message}"),
                None => tracing::trace!("{message}"),
            },
            LogLevel::Debug => match cause {
                Some(err) => tracing::debug!(error = %err, "{message}"),
                None => tracing::debug!("{message}"),
            },
            LogLevel::Info => match cause {
                Some(err) => tracing::info!(error = %err, "{message}"),
                None => tracing::info!("{message}"),
            },
            LogLevel::Warn => match cause {
                Some(err) => tracing::warn!(error = %err, "{message}"),
                None => tracing::warn!("{message}"),
            },
            LogLevel::Error => match cause {
                Some(err) => tracing::error!(error = %err, "{message}"),
                None => tracing::error!("{message}"),
            },
        }
    }
}
