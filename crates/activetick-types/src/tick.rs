//! Tick records.
//!
//! A tick is either a trade or a quote. The server shares one four-slot
//! condition column between the two row layouts; here each variant carries
//! only the conditions that mean something for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Exchange, QuoteCondition, TradeCondition};

/// Number of condition slots on a trade row.
pub const TRADE_CONDITION_SLOTS: usize = 4;

/// Discriminator of a tick row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickKind {
    /// Trade row (`T`).
    Trade,
    /// Quote row (`Q`).
    Quote,
}

impl TickKind {
    /// Returns the wire tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Trade => "T",
            Self::Quote => "Q",
        }
    }

    /// Looks up a kind by its wire tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "T" => Some(Self::Trade),
            "Q" => Some(Self::Quote),
            _ => None,
        }
    }
}

impl std::fmt::Display for TickKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A last-sale print.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Trade time (UTC, millisecond resolution).
    pub timestamp: DateTime<Utc>,
    /// Last price.
    pub price: f64,
    /// Last size.
    pub size: i64,
    /// Exchange that printed the trade.
    pub exchange: Exchange,
    /// Sale conditions; unused slots hold [`TradeCondition::REGULAR`].
    pub conditions: [TradeCondition; TRADE_CONDITION_SLOTS],
}

impl Trade {
    /// Creates a trade with no sale conditions.
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        price: f64,
        size: i64,
        exchange: Exchange,
    ) -> Self {
        Self {
            timestamp,
            price,
            size,
            exchange,
            conditions: [TradeCondition::REGULAR; TRADE_CONDITION_SLOTS],
        }
    }

    /// Sets the sale conditions.
    #[must_use]
    pub const fn with_conditions(
        mut self,
        conditions: [TradeCondition; TRADE_CONDITION_SLOTS],
    ) -> Self {
        self.conditions = conditions;
        self
    }

    /// Iterates over the non-regular conditions.
    pub fn special_conditions(&self) -> impl Iterator<Item = TradeCondition> + '_ {
        self.conditions.iter().copied().filter(|c| !c.is_regular())
    }
}

/// A top-of-book quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote time (UTC, millisecond resolution).
    pub timestamp: DateTime<Utc>,
    /// Bid price.
    pub bid_price: f64,
    /// Ask (offer) price.
    pub ask_price: f64,
    /// Size at the bid.
    pub bid_size: i64,
    /// Size at the ask.
    pub ask_size: i64,
    /// Exchange posting the bid.
    pub bid_exchange: Exchange,
    /// Exchange posting the ask.
    pub ask_exchange: Exchange,
    /// Quote condition.
    pub condition: QuoteCondition,
}

impl Quote {
    /// Returns the mid price (average of bid and ask).
    #[must_use]
    pub fn mid(&self) -> f64 {
        (self.ask_price + self.bid_price) / 2.0
    }

    /// Returns the spread (ask - bid).
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.ask_price - self.bid_price
    }
}

/// A single tick: a trade or a quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tick {
    /// Trade tick.
    Trade(Trade),
    /// Quote tick.
    Quote(Quote),
}

impl Tick {
    /// Returns the tick timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Trade(trade) => trade.timestamp,
            Self::Quote(quote) => quote.timestamp,
        }
    }

    /// Returns the row discriminator.
    #[must_use]
    pub const fn kind(&self) -> TickKind {
        match self {
            Self::Trade(_) => TickKind::Trade,
            Self::Quote(_) => TickKind::Quote,
        }
    }

    /// Returns the trade, if this is a trade tick.
    #[must_use]
    pub const fn as_trade(&self) -> Option<&Trade> {
        match self {
            Self::Trade(trade) => Some(trade),
            Self::Quote(_) => None,
        }
    }

    /// Returns the quote, if this is a quote tick.
    #[must_use]
    pub const fn as_quote(&self) -> Option<&Quote> {
        match self {
            Self::Quote(quote) => Some(quote),
            Self::Trade(_) => None,
        }
    }
}

impl From<Trade> for Tick {
    fn from(trade: Trade) -> Self {
        Self::Trade(trade)
    }
}

impl From<Quote> for Tick {
    fn from(quote: Quote) -> Self {
        Self::Quote(quote)
    }
}
