//! Trade and quote condition codes.
//!
//! Both tables are open: the server may send codes newer than this crate, so
//! conditions are integer newtypes with named constants rather than closed
//! enums.

use serde::{Deserialize, Serialize};

/// Sale condition attached to a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeCondition(pub i64);

impl TradeCondition {
    /// Regular sale. Also fills unused condition slots.
    pub const REGULAR: Self = Self(0);
    /// Acquisition.
    pub const ACQUISITION: Self = Self(1);
    /// Average price trade.
    pub const AVERAGE_PRICE: Self = Self(2);
    /// Automatic execution.
    pub const AUTOMATIC_EXECUTION: Self = Self(3);
    /// Bunched trade.
    pub const BUNCHED: Self = Self(4);
    /// Bunched sold trade.
    pub const BUNCH_SOLD: Self = Self(5);
    /// CAP election.
    pub const CAP_ELECTION: Self = Self(6);
    /// Cash sale.
    pub const CASH: Self = Self(7);
    /// Closing prints.
    pub const CLOSING: Self = Self(8);
    /// Cross trade.
    pub const CROSS: Self = Self(9);
    /// Derivatively priced.
    pub const DERIVATIVELY_PRICED: Self = Self(10);
    /// Distribution.
    pub const DISTRIBUTION: Self = Self(11);
    /// Form T (extended hours).
    pub const FORM_T: Self = Self(12);
    /// Form T, out of sequence.
    pub const FORM_T_OUT_OF_SEQUENCE: Self = Self(13);
    /// Intermarket sweep.
    pub const INTER_MARKET_SWEEP: Self = Self(14);
    /// Market center official close.
    pub const MARKET_CENTER_OFFICIAL_CLOSE: Self = Self(15);
    /// Market center official open.
    pub const MARKET_CENTER_OFFICIAL_OPEN: Self = Self(16);
    /// Market center opening trade.
    pub const MARKET_CENTER_OPENING: Self = Self(17);
    /// Market center reopening trade.
    pub const MARKET_CENTER_REOPENING: Self = Self(18);
    /// Market center closing trade.
    pub const MARKET_CENTER_CLOSING: Self = Self(19);
    /// Next day settlement.
    pub const NEXT_DAY: Self = Self(20);
    /// Price variation trade.
    pub const PRICE_VARIATION: Self = Self(21);
    /// Prior reference price.
    pub const PRIOR_REFERENCE_PRICE: Self = Self(22);
    /// Rule 155 trade (AMEX).
    pub const RULE_155_AMEX: Self = Self(23);
    /// Rule 127 trade (NYSE).
    pub const RULE_127_NYSE: Self = Self(24);
    /// Opening prints.
    pub const OPENING: Self = Self(25);
    /// Opened.
    pub const OPENED: Self = Self(26);
    /// Regular, stopped stock.
    pub const REGULAR_STOPPED_STOCK: Self = Self(27);
    /// Reopening prints.
    pub const REOPENING: Self = Self(28);
    /// Seller.
    pub const SELLER: Self = Self(29);
    /// Sold last.
    pub const SOLD_LAST: Self = Self(30);
    /// Sold last, stopped stock.
    pub const SOLD_LAST_STOPPED_STOCK: Self = Self(31);
    /// Sold out of sequence.
    pub const SOLD_OUT_OF_SEQUENCE: Self = Self(32);
    /// Sold out of sequence, stopped stock.
    pub const SOLD_OUT_OF_SEQUENCE_STOPPED_STOCK: Self = Self(33);
    /// Split trade.
    pub const SPLIT: Self = Self(34);
    /// Stock option trade.
    pub const STOCK_OPTION: Self = Self(35);
    /// Yellow flag regular trade.
    pub const YELLOW_FLAG: Self = Self(36);

    /// Returns the wire code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.0
    }

    /// Returns true for the regular (empty slot) condition.
    #[must_use]
    pub const fn is_regular(&self) -> bool {
        self.0 == Self::REGULAR.0
    }

    /// Returns a human-readable name, or `None` for codes outside the table.
    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        let name = match self.0 {
            0 => "regular",
            1 => "acquisition",
            2 => "average price",
            3 => "automatic execution",
            4 => "bunched",
            5 => "bunch sold",
            6 => "CAP election",
            7 => "cash",
            8 => "closing",
            9 => "cross",
            10 => "derivatively priced",
            11 => "distribution",
            12 => "form T",
            13 => "form T out of sequence",
            14 => "intermarket sweep",
            15 => "market center official close",
            16 => "market center official open",
            17 => "market center opening",
            18 => "market center reopening",
            19 => "market center closing",
            20 => "next day",
            21 => "price variation",
            22 => "prior reference price",
            23 => "rule 155 (AMEX)",
            24 => "rule 127 (NYSE)",
            25 => "opening",
            26 => "opened",
            27 => "regular stopped stock",
            28 => "reopening",
            29 => "seller",
            30 => "sold last",
            31 => "sold last stopped stock",
            32 => "sold out of sequence",
            33 => "sold out of sequence stopped stock",
            34 => "split",
            35 => "stock option",
            36 => "yellow flag",
            _ => return None,
        };
        Some(name)
    }
}

impl std::fmt::Display for TradeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "condition {}", self.0),
        }
    }
}

/// Condition attached to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCondition(pub i64);

impl QuoteCondition {
    /// Regular two-sided quote.
    pub const REGULAR: Self = Self(0);

    /// Returns the wire code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuoteCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
