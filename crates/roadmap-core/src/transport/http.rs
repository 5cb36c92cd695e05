//! Live [`Transport`] backed by `reqwest`.

use log::debug;
use reqwest::{header::CONTENT_TYPE, Client, Url};

use super::{ApiRequest, ApiResponse, Method, Transport, TransportFuture};
use crate::error::{Failure, Result, SyncError};

/// HTTP transport against a plan store base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Configuration` if `api_url` is not an absolute
    /// http(s) URL.
    pub fn new(api_url: &str) -> Result<Self> {
        let base_url = Url::parse(api_url.trim()).map_err(|e| {
            SyncError::configuration(format!("Invalid API URL '{api_url}': {e}"))
        })?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(SyncError::configuration(format!(
                "Invalid API URL '{api_url}': expected an http(s) URL"
            )));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Base URL all request paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for a request, with each path segment percent-encoded.
    pub fn url_for(&self, request: &ApiRequest) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty();
            segments.extend(&request.segments);
        }
        if let Some(user_id) = &request.user_id {
            url.query_pairs_mut().append_pair("user_id", user_id);
        }
        url
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let url = self.url_for(&request);
            debug!("{} {}", request.method, url);

            let builder = self.client.request(request.method.into(), url);
            let builder = match &request.body {
                Some(body) => builder.json(body),
                None => builder.header(CONTENT_TYPE, "application/json"),
            };

            let response = builder.send().await.map_err(|e| Failure::Network {
                message: e.to_string(),
            })?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| Failure::Network {
                message: format!("failed to read response body: {e}"),
            })?;
            debug!("{request} -> {status}");

            Ok(ApiResponse { status, body })
        })
    }
}
