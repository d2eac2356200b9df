//! Fetch commands for the atclient CLI.

use activetick_lib::HttpTransport;
use activetick_lib::prelude::*;
use anyhow::{Context, Result};

use crate::display::Output;

/// Paging client over a retrying `reqwest` transport.
pub(crate) type AtClient = PagingClient<RetryTransport<HttpTransport>>;

/// Builds the client for `config`.
pub(crate) fn connect(config: &ClientConfig, policy: RetryPolicy) -> Result<AtClient> {
    let transport = HttpTransport::new(config).context("Failed to build HTTP client")?;
    let client = Client::with_transport(RetryTransport::new(transport, policy), &config.endpoint)?;
    Ok(PagingClient::new(client))
}

/// Fetches bars for `request` and writes them to `output`.
pub(crate) async fn bars<T: Transport>(
    client: &PagingClient<T>,
    request: &BarRequest,
    paging: bool,
    output: &Output,
) -> Result<()> {
    let bars = if paging {
        client.fetch_bars(request).await
    } else {
        client.client().fetch_bars(request).await
    }
    .with_context(|| format!("Failed to fetch {} bars for {}", request.history_type, request.symbol))?;

    output.write_bars(&bars)
}

/// Fetches ticks for `request` and writes them to `output`.
pub(crate) async fn ticks<T: Transport>(
    client: &PagingClient<T>,
    request: &TickRequest,
    paging: bool,
    output: &Output,
) -> Result<()> {
    let ticks = if paging {
        client.fetch_ticks(request).await
    } else {
        client.client().fetch_ticks(request).await
    }
    .with_context(|| format!("Failed to fetch ticks for {}", request.symbol))?;

    output.write_ticks(&ticks)
}
