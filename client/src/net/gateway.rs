//! Single configuration point for outbound HTTP.
//!
//! Client-side (hydrate): requests go out through `gloo-net`.
//! Server-side (SSR): the default transport refuses every request, since
//! these endpoints are only meaningful in the browser.
//!
//! The gateway builds requests (base URL, default headers, optional bearer)
//! and hands back status + body untouched; interpreting bodies is the
//! service's job. No retries and no timeouts beyond the platform's.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use async_trait::async_trait;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully built request, ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response: status code and unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request did not reach the server (refused, offline, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be constructed.
    #[error("request build failed: {0}")]
    Build(String),

    /// The response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),

    /// No HTTP stack in this environment.
    #[error("not available on server")]
    Unavailable,
}

/// Executes built requests. Single-threaded: futures need not be `Send`.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Send `request` and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no response was obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `fetch`-backed transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Build(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Transport for environments without a browser; always `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl HttpTransport for OfflineTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
pub type DefaultTransport = BrowserTransport;
#[cfg(not(feature = "hydrate"))]
pub type DefaultTransport = OfflineTransport;

/// Base address + default headers + transport.
pub struct ApiGateway<T> {
    base_url: String,
    default_headers: Vec<(String, String)>,
    transport: T,
}

impl<T: HttpTransport> ApiGateway<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            default_headers: vec![("Accept".to_owned(), "application/json".to_owned())],
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path such as `/auth/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request with default headers, an optional bearer token, and an
    /// optional JSON body.
    pub fn build(&self, method: Method, path: &str, bearer: Option<&str>, body: Option<String>) -> ApiRequest {
        let mut headers = self.default_headers.clone();
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = bearer.filter(|token| !token.is_empty()) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        ApiRequest { method, url: self.url(path), headers, body }
    }

    /// `GET path`, with a bearer header when `bearer` is given.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`TransportError`].
    pub async fn get(&self, path: &str, bearer: Option<&str>) -> Result<ApiResponse, TransportError> {
        self.transport.send(self.build(Method::Get, path, bearer, None)).await
    }

    /// `POST path` with `body` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if `body` cannot be serialized, or
    /// propagates the transport's error.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, TransportError> {
        let body = serde_json::to_string(body).map_err(|e| TransportError::Build(e.to_string()))?;
        self.transport
            .send(self.build(Method::Post, path, None, Some(body)))
            .await
    }
}
