//! Historical data requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::HistoryType;

/// Request for OHLCV bars over a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarRequest {
    /// Ticker symbol.
    pub symbol: String,
    /// Bar granularity.
    pub history_type: HistoryType,
    /// Window start.
    pub begin: DateTime<Utc>,
    /// Window end.
    pub end: DateTime<Utc>,
}

impl BarRequest {
    /// Creates a new bar request.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        history_type: HistoryType,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            history_type,
            begin,
            end,
        }
    }

    /// Returns a copy of this request with a different window end.
    #[must_use]
    pub fn with_end(&self, end: DateTime<Utc>) -> Self {
        Self {
            end,
            ..self.clone()
        }
    }
}

/// Request for trade and/or quote ticks over a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRequest {
    /// Ticker symbol.
    pub symbol: String,
    /// Include trade ticks.
    pub trades: bool,
    /// Include quote ticks.
    pub quotes: bool,
    /// Window start.
    pub begin: DateTime<Utc>,
    /// Window end.
    pub end: DateTime<Utc>,
}

impl TickRequest {
    /// Creates a request for both trades and quotes.
    #[must_use]
    pub fn new(symbol: impl Into<String>, begin: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            symbol: symbol.into(),
            trades: true,
            quotes: true,
            begin,
            end,
        }
    }

    /// Sets whether trades are included.
    #[must_use]
    pub const fn with_trades(mut self, trades: bool) -> Self {
        self.trades = trades;
        self
    }

    /// Sets whether quotes are included.
    #[must_use]
    pub const fn with_quotes(mut self, quotes: bool) -> Self {
        self.quotes = quotes;
        self
    }

    /// Returns a copy of this request with a different window start.
    #[must_use]
    pub fn with_begin(&self, begin: DateTime<Utc>) -> Self {
        Self {
            begin,
            ..self.clone()
        }
    }
}
