//! Row decoding for bar and tick CSV responses.
//!
//! Bar rows have exactly six fields:
//!
//! ```text
//! time,open,high,low,close,volume
//! ```
//!
//! Tick rows have at least nine fields and start with a one-character tag:
//!
//! ```text
//! T,time,price,size,exchange,cond1,cond2,cond3,cond4
//! Q,time,bid,ask,bidSize,askSize,bidExchange,askExchange,condition
//! ```
//!
//! Bar times are `YYYYMMDDhhmmss`; tick times carry a trailing 3-digit
//! millisecond suffix. Fields are decoded left to right and the first field
//! that fails aborts the row. Exchange fields never fail: anything other than
//! a single character decodes to [`Exchange::Unspecified`].

use std::num::{ParseFloatError, ParseIntError};

use activetick_types::{
    Bar, Exchange, Quote, QuoteCondition, TRADE_CONDITION_SLOTS, Tick, TickKind, Trade,
    TradeCondition, WireTimeError, parse_wire_time, parse_wire_time_millis,
};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Number of fields in a bar row.
pub const BAR_FIELDS: usize = 6;

/// Minimum number of fields in a tick row.
pub const MIN_TICK_FIELDS: usize = 9;

/// Errors that can occur while decoding a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The row has the wrong number of fields.
    #[error("malformed row: expected {expected} fields, got {}: {row:?}", .row.len())]
    MalformedRow {
        /// The offending row.
        row: Vec<String>,
        /// Description of the expected field count.
        expected: &'static str,
    },

    /// A field failed numeric or time conversion.
    #[error("invalid {field} {value:?}: {source}")]
    FieldParse {
        /// Name of the field.
        field: &'static str,
        /// Raw field text.
        value: String,
        /// Underlying conversion error.
        #[source]
        source: FieldError,
    },

    /// The tick tag is neither `T` nor `Q`.
    #[error("unknown tick record type {tag:?}")]
    UnknownRecordType {
        /// The tag as received.
        tag: String,
    },
}

/// Conversion failure for a single field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Not a valid float.
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Not a valid integer.
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Not a valid wire timestamp.
    #[error(transparent)]
    Time(#[from] WireTimeError),
}

/// Decodes one bar row.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedRow`] if the row does not have exactly six
/// fields, or [`DecodeError::FieldParse`] for the first field that fails to
/// convert.
pub fn parse_bar_row<S: AsRef<str>>(row: &[S]) -> Result<Bar, DecodeError> {
    if row.len() != BAR_FIELDS {
        return Err(malformed(row, "6"));
    }

    let field = |i: usize| row[i].as_ref();
    Ok(Bar::new(
        parse_time("time", field(0))?,
        parse_f64("open", field(1))?,
        parse_f64("high", field(2))?,
        parse_f64("low", field(3))?,
        parse_f64("close", field(4))?,
        parse_i64("volume", field(5))?,
    ))
}

/// Decodes one tick row into a trade or quote.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedRow`] for rows shorter than nine fields,
/// [`DecodeError::UnknownRecordType`] for a tag other than `T` or `Q`, or
/// [`DecodeError::FieldParse`] for the first field that fails to convert.
pub fn parse_tick_row<S: AsRef<str>>(row: &[S]) -> Result<Tick, DecodeError> {
    if row.len() < MIN_TICK_FIELDS {
        return Err(malformed(row, "at least 9"));
    }

    let tag = row[0].as_ref();
    let kind = TickKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownRecordType {
        tag: tag.to_string(),
    })?;
    let timestamp = parse_tick_time("time", row[1].as_ref())?;

    match kind {
        TickKind::Trade => parse_trade(timestamp, row).map(Tick::Trade),
        TickKind::Quote => parse_quote(timestamp, row).map(Tick::Quote),
    }
}

fn parse_trade<S: AsRef<str>>(timestamp: DateTime<Utc>, row: &[S]) -> Result<Trade, DecodeError> {
    let price = parse_f64("last price", row[2].as_ref())?;
    let size = parse_i64("last size", row[3].as_ref())?;
    let exchange = Exchange::from_field(row[4].as_ref());

    let mut conditions = [TradeCondition::REGULAR; TRADE_CONDITION_SLOTS];
    for (slot, value) in conditions.iter_mut().zip(&row[5..5 + TRADE_CONDITION_SLOTS]) {
        *slot = TradeCondition(parse_i64("trade condition", value.as_ref())?);
    }

    Ok(Trade::new(timestamp, price, size, exchange).with_conditions(conditions))
}

fn parse_quote<S: AsRef<str>>(timestamp: DateTime<Utc>, row: &[S]) -> Result<Quote, DecodeError> {
    Ok(Quote {
        timestamp,
        bid_price: parse_f64("bid price", row[2].as_ref())?,
        ask_price: parse_f64("ask price", row[3].as_ref())?,
        bid_size: parse_i64("bid size", row[4].as_ref())?,
        ask_size: parse_i64("ask size", row[5].as_ref())?,
        bid_exchange: Exchange::from_field(row[6].as_ref()),
        ask_exchange: Exchange::from_field(row[7].as_ref()),
        condition: QuoteCondition(parse_i64("quote condition", row[8].as_ref())?),
    })
}

fn malformed<S: AsRef<str>>(row: &[S], expected: &'static str) -> DecodeError {
    DecodeError::MalformedRow {
        row: row.iter().map(|f| f.as_ref().to_string()).collect(),
        expected,
    }
}

fn field_error(field: &'static str, value: &str, source: impl Into<FieldError>) -> DecodeError {
    DecodeError::FieldParse {
        field,
        value: value.to_string(),
        source: source.into(),
    }
}

fn parse_f64(field: &'static str, value: &str) -> Result<f64, DecodeError> {
    value.parse().map_err(|e: ParseFloatError| field_error(field, value, e))
}

fn parse_i64(field: &'static str, value: &str) -> Result<i64, DecodeError> {
    value.parse().map_err(|e: ParseIntError| field_error(field, value, e))
}

fn parse_time(field: &'static str, value: &str) -> Result<DateTime<Utc>, DecodeError> {
    parse_wire_time(value).map_err(|e| field_error(field, value, e))
}

fn parse_tick_time(field: &'static str, value: &str) -> Result<DateTime<Utc>, DecodeError> {
    parse_wire_time_millis(value).map_err(|e| field_error(field, value, e))
}
