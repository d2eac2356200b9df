//! HTTP transport and client configuration.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use std::time::Duration;

/// Default server endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000";

/// Error raised by a transport when the GET itself fails.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration for the request client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the data server, without a trailing route.
    pub endpoint: String,
    /// Whole-request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("activetick/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a default configuration pointing at `endpoint`.
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

/// Status and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for `200 OK`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// A single-attempt HTTP GET.
///
/// The request client talks to the server only through this trait, so tests
/// and callers with their own networking stack can swap it out.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET and returns the status and full body.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. Non-success
    /// statuses are not errors at this level.
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            // Pagers hit the same host back to back
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(HttpResponse { status, body })
    }
}
