//! Single-request client for the bar and tick endpoints.

use activetick_types::{Bar, BarRequest, Tick, TickRequest};
use csv_async::AsyncReaderBuilder;
use futures::StreamExt;
use reqwest::Url;
use thiserror::Error;

use crate::parse::{DecodeError, parse_bar_row, parse_tick_row};
use crate::transport::{ClientConfig, HttpTransport, Transport, TransportError};
use crate::url::{BAR_ROUTE, TICK_ROUTE, bar_query, route_url, tick_query};

/// Errors that can occur while fetching one page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The GET itself failed.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] TransportError),

    /// Server returned a non-200 status.
    #[error("server returned {status}: {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
    },

    /// Response body is not valid CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// A row could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The configured endpoint is not a valid base URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Issues single bar and tick requests.
///
/// Each call is one GET with no retries and no paging; see
/// [`crate::PagingClient`] for windows larger than one response.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
    endpoint: Url,
}

impl Client {
    /// Creates a client backed by `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot
    /// be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(transport, &config.endpoint)
    }

    /// Creates a client for `http://localhost:5000`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute URL that can carry a path.
    pub fn with_transport(transport: T, endpoint: &str) -> Result<Self, FetchError> {
        let invalid = |reason: String| FetchError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };
        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_string()));
        }
        Ok(Self {
            transport,
            endpoint: url,
        })
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the base endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches one page of bars, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the GET fails, the status is not 200, or any row
    /// fails to decode. No partial result is returned.
    pub async fn fetch_bars(&self, request: &BarRequest) -> Result<Vec<Bar>, FetchError> {
        let url = route_url(&self.endpoint, BAR_ROUTE, &bar_query(request));
        let body = self.get(&url).await?;

        let mut reader = csv_reader(&body);
        let mut records = reader.records();
        let mut bars = Vec::new();
        while let Some(record) = records.next().await {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();
            bars.push(parse_bar_row(&fields)?);
        }

        tracing::debug!(symbol = %request.symbol, rows = bars.len(), "decoded bar page");
        Ok(bars)
    }

    /// Fetches one page of trades and/or quotes, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the GET fails, the status is not 200, or any row
    /// fails to decode. No partial result is returned.
    pub async fn fetch_ticks(&self, request: &TickRequest) -> Result<Vec<Tick>, FetchError> {
        let url = route_url(&self.endpoint, TICK_ROUTE, &tick_query(request));
        let body = self.get(&url).await?;

        let mut reader = csv_reader(&body);
        let mut records = reader.records();
        let mut ticks = Vec::new();
        while let Some(record) = records.next().await {
            let record = record?;
            let fields: Vec<&str> = record.iter().collect();
            ticks.push(parse_tick_row(&fields)?);
        }

        tracing::debug!(symbol = %request.symbol, rows = ticks.len(), "decoded tick page");
        Ok(ticks)
    }

    async fn get(&self, url: &Url) -> Result<bytes::Bytes, FetchError> {
        tracing::debug!(%url, "GET");
        let response = self.transport.get(url).await.map_err(FetchError::Transport)?;
        if !response.is_ok() {
            return Err(FetchError::Server {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }
        Ok(response.body)
    }
}

// Headerless, and rows may differ in length; the decoders check counts.
// No trimming: a lone space is the composite exchange code.
fn csv_reader(body: &[u8]) -> csv_async::AsyncReader<&[u8]> {
    AsyncReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .create_reader(body)
}
