//! Wire types for the snapshot, streaming and option-chain endpoints.
//!
//! The client does not call these endpoints yet; the types pin down the wire
//! contract so callers can share one vocabulary with the historical API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Exchange, QuoteCondition, TradeCondition, tick::TRADE_CONDITION_SLOTS};

wire_code_enum! {
    /// Per-symbol status in a snapshot response.
    pub enum SymbolStatus: u8 {
        /// Data returned.
        Success = 1,
        /// Symbol not recognised.
        Invalid = 2,
        /// Symbol known but no data available.
        Unavailable = 3,
        /// Account lacks the entitlement for this symbol.
        NoPermission = 4,
    }
}

wire_code_enum! {
    /// Field selectors for a quote snapshot request.
    pub enum QuoteField: u8 {
        /// Symbol.
        Symbol = 1,
        /// Session open price.
        OpenPrice = 2,
        /// Previous session close.
        PreviousClosePrice = 3,
        /// Session close price.
        ClosePrice = 4,
        /// Last trade price.
        LastPrice = 5,
        /// Best bid.
        BidPrice = 6,
        /// Best ask.
        AskPrice = 7,
        /// Session high.
        HighPrice = 8,
        /// Session low.
        LowPrice = 9,
        /// Day high including extended hours.
        DayHighPrice = 10,
        /// Day low including extended hours.
        DayLowPrice = 11,
        /// Pre-market open price.
        PreMarketOpenPrice = 12,
        /// Extended hours last price.
        ExtendedHoursLastPrice = 13,
        /// After-market close price.
        AfterMarketClosePrice = 14,
        /// Bid exchange.
        BidExchange = 15,
        /// Ask exchange.
        AskExchange = 16,
        /// Last trade exchange.
        LastExchange = 17,
        /// Last trade condition.
        LastCondition = 18,
        /// Quote condition.
        QuoteCondition = 19,
        /// Last trade time.
        LastTradeDateTime = 20,
        /// Last quote time.
        LastQuoteDateTime = 21,
        /// Time of the day high.
        DayHighDateTime = 22,
        /// Time of the day low.
        DayLowDateTime = 23,
        /// Last trade size.
        LastSize = 24,
        /// Bid size.
        BidSize = 25,
        /// Ask size.
        AskSize = 26,
        /// Session volume.
        Volume = 27,
        /// Pre-market volume.
        PreMarketVolume = 28,
        /// After-market volume.
        AfterMarketVolume = 29,
        /// Session trade count.
        TradeCount = 30,
        /// Pre-market trade count.
        PreMarketTradeCount = 31,
        /// After-market trade count.
        AfterMarketTradeCount = 32,
        /// Company name.
        FundamentalEquityName = 33,
        /// Primary listing exchange.
        FundamentalEquityPrimaryExchange = 34,
    }
}

wire_code_enum! {
    /// Value type tag of a snapshot data item.
    pub enum DataItemType: u8 {
        /// Single byte.
        Byte = 1,
        /// Byte array.
        ByteArray = 2,
        /// Unsigned 32-bit integer.
        UInteger32 = 3,
        /// Unsigned 64-bit integer.
        UInteger64 = 4,
        /// Signed 32-bit integer.
        Integer32 = 5,
        /// Signed 64-bit integer.
        Integer64 = 6,
        /// Price.
        Price = 7,
        /// ASCII string.
        String = 8,
        /// Unicode string.
        UnicodeString = 9,
        /// Date and time.
        DateTime = 10,
        /// Double-precision float.
        Double = 11,
    }
}

/// Bit set describing which session statistics a streamed trade updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeFlags(pub u32);

impl TradeFlags {
    /// Updates the regular-market last price.
    pub const REGULAR_MARKET_LAST_PRICE: Self = Self(0x1);
    /// Updates the regular-market volume.
    pub const REGULAR_MARKET_VOLUME: Self = Self(0x2);
    /// Updates the session high.
    pub const HIGH_PRICE: Self = Self(0x4);
    /// Updates the session low.
    pub const LOW_PRICE: Self = Self(0x8);
    /// Updates the day high.
    pub const DAY_HIGH_PRICE: Self = Self(0x10);
    /// Updates the day low.
    pub const DAY_LOW_PRICE: Self = Self(0x20);
    /// Updates the extended-market last price.
    pub const EXTENDED_MARKET_LAST_PRICE: Self = Self(0x40);
    /// Updates the pre-market volume.
    pub const PRE_MARKET_VOLUME: Self = Self(0x80);
    /// Updates the after-market volume.
    pub const AFTER_MARKET_VOLUME: Self = Self(0x100);
    /// Updates the pre-market open price.
    pub const PRE_MARKET_OPEN_PRICE: Self = Self(0x200);
    /// Updates the open price.
    pub const OPEN_PRICE: Self = Self(0x400);

    /// Returns true if every bit of `other` is set.
    #[must_use]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for TradeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Request for a quote snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteSnapshotRequest {
    /// Symbols to snapshot.
    pub symbols: Vec<String>,
    /// Fields to return for each symbol.
    pub fields: Vec<QuoteField>,
}

/// One symbol of a quote snapshot response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct QuoteSnapshotRecord {
    pub symbol: String,
    pub status: SymbolStatus,
    pub open_price: f64,
    pub previous_close_price: f64,
    pub close_price: f64,
    pub last_price: f64,
    pub bid_price: f64,
    pub ask_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub day_high_price: f64,
    pub day_low_price: f64,
    pub pre_market_open_price: f64,
    pub extended_hours_last_price: f64,
    pub after_market_close_price: f64,
    pub bid_exchange: Exchange,
    pub ask_exchange: Exchange,
    pub last_exchange: Exchange,
    pub last_condition: TradeCondition,
    pub quote_condition: QuoteCondition,
    pub last_trade_time: DateTime<Utc>,
    pub last_quote_time: DateTime<Utc>,
    pub day_high_time: DateTime<Utc>,
    pub day_low_time: DateTime<Utc>,
    pub last_size: i64,
    pub bid_size: i64,
    pub ask_size: i64,
    pub volume: i64,
    pub pre_market_volume: i64,
    pub after_market_volume: i64,
    pub trade_count: i64,
    pub pre_market_trade_count: i64,
    pub after_market_trade_count: i64,
    pub fundamental_equity_name: String,
    pub fundamental_equity_primary_exchange: Exchange,
}

/// Subscription request for the trade/quote stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuoteStreamRequest {
    /// Symbols to subscribe to.
    pub symbols: Vec<String>,
}

/// A streamed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStreamRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Session statistics this trade updates.
    pub flags: TradeFlags,
    /// Sale conditions.
    pub conditions: [TradeCondition; TRADE_CONDITION_SLOTS],
    /// Exchange that printed the trade.
    pub exchange: Exchange,
    /// Trade price.
    pub price: f64,
    /// Trade size.
    pub size: i64,
    /// Trade time.
    pub timestamp: DateTime<Utc>,
}

/// A streamed quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteStreamRecord {
    /// Ticker symbol.
    pub symbol: String,
    /// Quote condition.
    pub condition: QuoteCondition,
    /// Exchange posting the bid.
    pub bid_exchange: Exchange,
    /// Exchange posting the ask.
    pub ask_exchange: Exchange,
    /// Bid price.
    pub bid_price: f64,
    /// Ask price.
    pub ask_price: f64,
    /// Size at the bid.
    pub bid_size: i64,
    /// Size at the ask.
    pub ask_size: i64,
    /// Quote time.
    pub timestamp: DateTime<Utc>,
}

/// Request for the option chain of an underlying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChainRequest {
    /// Underlying symbol.
    pub symbol: String,
}

/// Option symbols listed on an underlying.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionChainResponse {
    /// Option contract symbols.
    pub symbols: Vec<String>,
}
