//! Bar history granularity.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Granularity of the bars requested from the bar endpoint.
///
/// On the wire this is split into two parameters: `historyType`
/// (`0` intraday, `1` daily, `2` weekly) and `intradayMinutes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryType {
    /// Intraday bars of the given number of minutes.
    Intraday {
        /// Bar width in minutes.
        minutes: u32,
    },
    /// Daily bars.
    Daily,
    /// Weekly bars.
    Weekly,
}

impl HistoryType {
    /// One-minute intraday bars.
    pub const MINUTE: Self = Self::Intraday { minutes: 1 };

    /// Returns the `historyType` wire code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Intraday { .. } => 0,
            Self::Daily => 1,
            Self::Weekly => 2,
        }
    }

    /// Returns the `intradayMinutes` wire value (0 for daily and weekly bars).
    #[must_use]
    pub const fn intraday_minutes(&self) -> u32 {
        match self {
            Self::Intraday { minutes } => *minutes,
            Self::Daily | Self::Weekly => 0,
        }
    }

    /// Returns true for intraday bars.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Intraday { .. })
    }
}

impl Default for HistoryType {
    fn default() -> Self {
        Self::MINUTE
    }
}

impl std::fmt::Display for HistoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intraday { minutes } => write!(f, "{minutes}m"),
            Self::Daily => f.write_str("daily"),
            Self::Weekly => f.write_str("weekly"),
        }
    }
}

impl FromStr for HistoryType {
    type Err = HistoryTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "intraday" | "minute" => return Ok(Self::MINUTE),
            "d" | "1d" | "day" | "daily" => return Ok(Self::Daily),
            "w" | "1w" | "week" | "weekly" => return Ok(Self::Weekly),
            _ => {}
        }

        let minutes = lower
            .strip_suffix('m')
            .or_else(|| lower.strip_prefix('m'))
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .ok_or_else(|| HistoryTypeParseError(s.to_string()))?;

        Ok(Self::Intraday { minutes })
    }
}

/// Error returned when parsing an invalid history type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTypeParseError(String);

impl std::fmt::Display for HistoryTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid history type '{}', expected <N>m (e.g. 1m, 5m), daily or weekly",
            self.0
        )
    }
}

impl std::error::Error for HistoryTypeParseError {}
