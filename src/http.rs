//! Outbound transport for signed requests.
//!
//! A non-200 status is returned as data; only connection, timeout and TLS
//! failures become errors here.

use std::fmt::Write as _;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::config;
use crate::error::Result;
use crate::oauth::SignedRequest;

/// Status, headers and body of a completed exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Response headers rendered one per line as `name: value`. Empty unless
    /// header capture was requested.
    pub headers: String,
    pub body: String,
}

/// Executes a single signed GET. No retries.
pub trait Transport: Send + Sync {
    fn get(&self, request: &SignedRequest, capture_headers: bool) -> Result<RawResponse>;
}

// ---------------------------------------------------------------------------
// HttpGateway
// ---------------------------------------------------------------------------

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
}

impl HttpGateway {
    /// Build a gateway with an overall request timeout and a connect timeout.
    ///
    /// Redirects are not followed; a 3xx comes back as the response status.
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// Gateway with the default 10 s / 5 s timeouts.
    pub fn with_defaults() -> Result<Self> {
        Self::new(config::DEFAULT_TIMEOUT, config::DEFAULT_CONNECT_TIMEOUT)
    }
}

impl Transport for HttpGateway {
    fn get(&self, request: &SignedRequest, capture_headers: bool) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "sending signed request");

        let resp = self
            .client
            .get(request.url.clone())
            .header(reqwest::header::AUTHORIZATION, &request.authorization)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = resp.status().as_u16();
        let headers = if capture_headers {
            render_headers(resp.headers())
        } else {
            String::new()
        };
        let body = resp.text()?;

        debug!(status, bytes = body.len(), "received response");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn render_headers(headers: &reqwest::header::HeaderMap) -> String {
    let mut text = String::new();
    for (name, value) in headers {
        // Non-visible-ASCII values are dropped; the only header read
        // downstream is a decimal count.
        if let Ok(value) = value.to_str() {
            let _ = write!(text, "{}: {}\r\n", name.as_str(), value);
        }
    }
    text
}
