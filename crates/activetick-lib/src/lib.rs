//! Rust client for the activetick HTTP market-data server.
//!
//! This is a facade crate that re-exports functionality from the activetick
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```no_run
//! use activetick_lib::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PagingClient::from_config(ClientConfig::default())?;
//!
//!     let request = BarRequest::new(
//!         "SPY",
//!         HistoryType::MINUTE,
//!         Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 0).unwrap(),
//!         Utc.with_ymd_and_hms(2016, 10, 4, 14, 40, 0).unwrap(),
//!     );
//!     let bars = client.fetch_bars(&request).await?;
//!     println!("Fetched {} bars", bars.len());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/timpalpant/activetick-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use activetick_types::*;

// Re-export the request client and pagers
#[cfg(feature = "fetch")]
pub use activetick_fetch::{
    Client, ClientConfig, DEFAULT_ENDPOINT, DecodeError, FetchError, FieldError, HttpResponse,
    HttpTransport, MAX_BARS_PER_PAGE, MAX_TICKS_PER_PAGE, PageLimits, PagingClient, RetryPolicy,
    RetryTransport, Transport, TransportError, Url, encode, parse,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use activetick_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat, WireFormatter,
};

/// Prelude module for convenient imports.
///
/// ```
/// use activetick_lib::prelude::*;
/// ```
pub mod prelude {
    pub use activetick_types::{
        Bar, BarRequest, Exchange, HistoryType, Quote, QuoteCondition, Tick, TickKind,
        TickRequest, Trade, TradeCondition,
    };

    #[cfg(feature = "fetch")]
    pub use activetick_fetch::{
        Client, ClientConfig, FetchError, PageLimits, PagingClient, RetryPolicy, RetryTransport,
        Transport,
    };

    #[cfg(feature = "format")]
    pub use activetick_format::{
        CsvFormatter, Formatter, JsonFormatter, OutputFormat, WireFormatter,
    };
}
