//! Outbound HTTP contract.
//!
//! Custom code may call external services over HTTP, subject to the
//! platform's domain whitelist and egress rate limits. The verb is chosen by
//! the trait method invoked, so a request carries only URL, headers, and an
//! optional body.

use crate::error::HttpResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// An outbound HTTP request.
///
/// Header order is preserved as given and never sorted. The URL is carried
/// verbatim; the platform validates it and rejects non-whitelisted domains
/// at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A request with no headers and no body.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a body, for the verbs that accept one.
    pub fn with_body(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// Appends one header, builder style.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// An outbound HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub code: u16,
    /// Response headers in the order received; not sorted.
    pub headers: Vec<(String, String)>,
    /// The response body; empty if the remote end sent none.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response, normalizing a missing body to the empty string.
    pub fn new(code: u16, headers: Vec<(String, String)>, body: Option<String>) -> Self {
        Self {
            code,
            headers,
            body: body.unwrap_or_default(),
        }
    }

    /// True if the remote end sent a non-empty body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Synchronous and asynchronous HTTP egress.
///
/// Bodies are ignored for GET and DELETE. Every method can fail with an
/// access denial (rate limit exhausted, domain not whitelisted, or any
/// other refusal by the egress environment) or a timeout; see
/// [`HttpError`](crate::error::HttpError).
///
/// The async variants default to running their synchronous counterpart
/// inline; platform implementations override them to queue the request off
/// the calling thread.
#[async_trait]
pub trait HttpService: Send + Sync {
    /// Whether the given URL's domain is on the egress whitelist.
    fn is_whitelisted(&self, url: &str) -> bool;

    /// Executes a GET request.
    fn get(&self, req: &HttpRequest) -> HttpResult<HttpResponse>;

    /// Executes a POST request.
    fn post(&self, req: &HttpRequest) -> HttpResult<HttpResponse>;

    /// Executes a PUT request.
    fn put(&self, req: &HttpRequest) -> HttpResult<HttpResponse>;

    /// Executes a DELETE request.
    fn delete(&self, req: &HttpRequest) -> HttpResult<HttpResponse>;

    /// Executes a GET request in the background.
    async fn get_async(&self, req: HttpRequest) -> HttpResult<HttpResponse> {
        self.get(&req)
    }

    /// Executes a POST request in the background.
    async fn post_async(&self, req: HttpRequest) -> HttpResult<HttpResponse> {
        self.post(&req)
    }

    /// Executes a PUT request in the background.
    async fn put_async(&self, req: HttpRequest) -> HttpResult<HttpResponse> {
        self.put(&req)
    }

    /// Executes a DELETE request in the background.
    async fn delete_async(&self, req: HttpRequest) -> HttpResult<HttpResponse> {
        self.delete(&req)
    }
}
