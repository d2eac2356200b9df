//! HTTP request client and pagers for the activetick data server.
//!
//! - [`Client`] - one GET per call against `/barData` or `/tickData`
//! - [`PagingClient`] - follows server row caps until a window is complete
//! - [`Transport`] - the injectable GET seam, with [`HttpTransport`] over `reqwest`
//! - [`RetryTransport`] - opt-in exponential backoff around any transport
//! - [`parse`] / [`encode`] - wire-row decoding and encoding

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/timpalpant/activetick-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod encode;
mod paging;
pub mod parse;
mod retry;
mod transport;
pub mod url;

#[cfg(test)]
mod testing;

pub use client::{Client, FetchError};
pub use paging::{MAX_BARS_PER_PAGE, MAX_TICKS_PER_PAGE, PageLimits, PagingClient, trim_tail};
pub use parse::{DecodeError, FieldError, parse_bar_row, parse_tick_row};
pub use reqwest::Url;
pub use retry::{RetryPolicy, RetryTransport, is_retryable_status};
pub use transport::{
    ClientConfig, DEFAULT_ENDPOINT, HttpResponse, HttpTransport, Transport, TransportError,
};
