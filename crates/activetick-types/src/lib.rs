//! Core types for the activetick market-data client.
//!
//! This crate provides the data structures shared by every other crate:
//!
//! - [`Bar`] - One OHLCV interval
//! - [`Tick`] - A [`Trade`] or a [`Quote`]
//! - [`Exchange`], [`TradeCondition`], [`QuoteCondition`] - Wire code tables
//! - [`BarRequest`], [`TickRequest`], [`HistoryType`] - Historical data requests
//! - [`format_wire_time`], [`parse_wire_time`], [`parse_wire_time_millis`] - Wire timestamp codec

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/timpalpant/activetick-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod bar;
mod condition;
mod error;
mod exchange;
mod history;
pub mod quote;
mod request;
mod tick;
mod time;

pub use bar::Bar;
pub use condition::{QuoteCondition, TradeCondition};
pub use error::WireTimeError;
pub use exchange::Exchange;
pub use history::{HistoryType, HistoryTypeParseError};
pub use request::{BarRequest, TickRequest};
pub use tick::{Quote, TRADE_CONDITION_SLOTS, Tick, TickKind, Trade};
pub use time::{
    WIRE_TIME_FORMAT, WIRE_TIME_LEN, WIRE_TIME_MILLIS_LEN, format_wire_time,
    format_wire_time_millis, parse_wire_time, parse_wire_time_millis, truncate_to_second,
};
