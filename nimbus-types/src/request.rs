//! The processed form of an inbound API request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The HTTP verb a custom method was invoked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MethodVerb {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for MethodVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A string did not name one of the four supported verbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown method verb: {0}")]
pub struct ParseMethodVerbError(pub String);

impl FromStr for MethodVerb {
    type Err = ParseMethodVerbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            other => Err(ParseMethodVerbError(other.to_owned())),
        }
    }
}

/// An inbound API call, already routed and parsed by the platform.
///
/// The platform constructs one of these per request and hands it to the
/// resolved custom method together with a service provider. Query parameter
/// keys are unique; their order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRequest {
    /// The HTTP verb of the call.
    pub verb: MethodVerb,
    /// The full URL the call arrived on.
    pub url: String,
    /// The custom method name the platform resolved the call to.
    pub method_name: String,
    /// Query parameters, keyed uniquely.
    pub params: HashMap<String, String>,
    /// The authenticated user, if any. Never the empty string.
    pub logged_in_user: Option<String>,
    /// The application this request belongs to.
    pub app_name: String,
    /// The API version number the caller addressed.
    pub api_version: u32,
    /// How many requests this runtime instance had handled up to and
    /// including this one. Monotonically increasing per process.
    pub counter: u64,
}

impl ProcessedRequest {
    /// Creates a processed request.
    ///
    /// An empty `logged_in_user` string is normalized to "not logged in";
    /// callers can rely on `logged_in_user` never holding `Some("")`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        verb: MethodVerb,
        url: impl Into<String>,
        method_name: impl Into<String>,
        params: HashMap<String, String>,
        logged_in_user: Option<String>,
        app_name: impl Into<String>,
        api_version: u32,
        counter: u64,
    ) -> Self {
        Self {
            verb,
            url: url.into(),
            method_name: method_name.into(),
            params,
            logged_in_user: logged_in_user.filter(|user| !user.is_empty()),
            app_name: app_name.into(),
            api_version,
            counter,
        }
    }

    /// Looks up a single query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// True if the request was made by an authenticated user.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in_user.is_some()
    }
}

impl fmt::Display for ProcessedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.url)
    }
}
