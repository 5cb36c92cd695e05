//! Transport port between the client and the remote plan store.
//!
//! The client never talks to HTTP directly; it hands an [`ApiRequest`] to a
//! [`Transport`] and gets an [`ApiResponse`] back. [`HttpTransport`] is the
//! live adapter. Tests inject their own implementations instead of reaching
//! into client state.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Failure;

pub mod http;

pub use http::HttpTransport;

/// Boxed future returned by [`Transport::send`], keeping the trait
/// dyn-compatible.
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ApiResponse, Failure>> + Send + 'a>>;

/// Sends requests to the plan store.
pub trait Transport: Send + Sync {
    /// Issue `request` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`Failure::Network`] when no response was received. Non-2xx
    /// responses are *not* errors at this level.
    fn send(&self, request: ApiRequest) -> TransportFuture<'_>;
}

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// A single call against the plan store API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Unencoded path segments below the API base, e.g. `["api", "task", id]`
    pub segments: Vec<String>,
    /// Value for the `user_id` query parameter, if the endpoint is scoped
    pub user_id: Option<String>,
    /// JSON body, if any
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request without query or body.
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            user_id: None,
            body: None,
        }
    }

    /// Scope the request to a user.
    pub fn scoped_to(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path as a slash-joined string, for logging and matching.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

/// Status and raw body of a store response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body (may be empty)
    pub body: String,
}

impl ApiResponse {
    /// Create a response from a status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail with [`Failure::Status`] unless the status is 2xx.
    pub fn ensure_success(self) -> Result<Self, Failure> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Failure::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    /// Decode the body as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Failure> {
        serde_json::from_str(&self.body).map_err(|source| Failure::Malformed { source })
    }
}
