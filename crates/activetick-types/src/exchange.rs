//! Exchange codes.

use serde::{Deserialize, Serialize};

/// Market center a trade or quote originated from.
///
/// On the wire each exchange is a single ASCII character. Codes missing from
/// the table are preserved as [`Exchange::Other`] so that they survive a
/// decode/encode round trip. Fields that are not a single character never
/// fail to decode; they become [`Exchange::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Exchange {
    /// NYSE American (`A`).
    Amex,
    /// Nasdaq OMX BX (`B`).
    NasdaqOmxBx,
    /// National Stock Exchange (`C`).
    NationalStockExchange,
    /// FINRA Alternative Display Facility (`D`).
    FinraAdf,
    /// Consolidated Quotation System (`E`).
    Cqs,
    /// Forex (`F`).
    Forex,
    /// International Securities Exchange (`I`).
    InternationalSecuritiesExchange,
    /// EDGA (`J`).
    Edga,
    /// EDGX (`K`).
    Edgx,
    /// Chicago Stock Exchange (`M`).
    ChicagoStockExchange,
    /// NYSE Euronext (`N`).
    NyseEuronext,
    /// NYSE Arca (`P`).
    NyseArca,
    /// Nasdaq OMX (`Q`).
    NasdaqOmx,
    /// Consolidated Tape System (`S`).
    Cts,
    /// CTA Nasdaq OMX (`T`).
    ///
    /// The server also uses `T` for the Toronto Stock Exchange; the code alone
    /// cannot tell the two apart.
    CtaNasdaqOmx,
    /// OTC Bulletin Board (`U`).
    OtcBb,
    /// Non-Nasdaq OTC (`u`).
    NnOtc,
    /// TSX Venture (`V`).
    CanadaVenture,
    /// Chicago Board Options Exchange (`W`).
    Cboe,
    /// Nasdaq OMX PHLX (`X`).
    NasdaqOmxPhlx,
    /// BATS Y-Exchange (`Y`).
    BatsY,
    /// BATS Exchange (`Z`).
    Bats,
    /// Composite across all exchanges (space).
    Composite,
    /// A code not in the table above.
    Other(char),
    /// No usable code: the field was empty or longer than one character.
    /// Encodes as an empty field.
    Unspecified,
}

impl Exchange {
    /// Returns the exchange for a wire code.
    #[must_use]
    pub const fn from_code(code: char) -> Self {
        match code {
            'A' => Self::Amex,
            'B' => Self::NasdaqOmxBx,
            'C' => Self::NationalStockExchange,
            'D' => Self::FinraAdf,
            'E' => Self::Cqs,
            'F' => Self::Forex,
            'I' => Self::InternationalSecuritiesExchange,
            'J' => Self::Edga,
            'K' => Self::Edgx,
            'M' => Self::ChicagoStockExchange,
            'N' => Self::NyseEuronext,
            'P' => Self::NyseArca,
            'Q' => Self::NasdaqOmx,
            'S' => Self::Cts,
            'T' => Self::CtaNasdaqOmx,
            'U' => Self::OtcBb,
            'u' => Self::NnOtc,
            'V' => Self::CanadaVenture,
            'W' => Self::Cboe,
            'X' => Self::NasdaqOmxPhlx,
            'Y' => Self::BatsY,
            'Z' => Self::Bats,
            ' ' => Self::Composite,
            other => Self::Other(other),
        }
    }

    /// Parses a wire field.
    ///
    /// A single character is looked up with [`Exchange::from_code`]; anything
    /// else is [`Exchange::Unspecified`].
    #[must_use]
    pub fn from_field(field: &str) -> Self {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Self::Unspecified,
        }
    }

    /// Returns the wire code, or `None` for [`Exchange::Unspecified`].
    #[must_use]
    pub const fn code(&self) -> Option<char> {
        let code = match self {
            Self::Amex => 'A',
            Self::NasdaqOmxBx => 'B',
            Self::NationalStockExchange => 'C',
            Self::FinraAdf => 'D',
            Self::Cqs => 'E',
            Self::Forex => 'F',
            Self::InternationalSecuritiesExchange => 'I',
            Self::Edga => 'J',
            Self::Edgx => 'K',
            Self::ChicagoStockExchange => 'M',
            Self::NyseEuronext => 'N',
            Self::NyseArca => 'P',
            Self::NasdaqOmx => 'Q',
            Self::Cts => 'S',
            Self::CtaNasdaqOmx => 'T',
            Self::OtcBb => 'U',
            Self::NnOtc => 'u',
            Self::CanadaVenture => 'V',
            Self::Cboe => 'W',
            Self::NasdaqOmxPhlx => 'X',
            Self::BatsY => 'Y',
            Self::Bats => 'Z',
            Self::Composite => ' ',
            Self::Other(code) => *code,
            Self::Unspecified => return None,
        };
        Some(code)
    }
}

/// Writes the wire field: the code character, or nothing when unspecified.
impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code() {
            Some(code) => write!(f, "{code}"),
            None => Ok(()),
        }
    }
}

impl From<Exchange> for String {
    fn from(exchange: Exchange) -> Self {
        exchange.to_string()
    }
}

impl From<String> for Exchange {
    fn from(value: String) -> Self {
        Self::from_field(&value)
    }
}
