//! Headerless output in the server's own row layout.

use activetick_fetch::encode::{bar_row, csv_line, tick_row};
use activetick_types::{Bar, Tick};
use std::io::Write;

use crate::{FormatError, Formatter};

/// Writes rows exactly as `/barData` and `/tickData` return them.
///
/// Output can be served back to the decoders unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireFormatter;

impl WireFormatter {
    /// Creates a wire formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Formatter for WireFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        for bar in bars {
            writeln!(writer, "{}", csv_line(&bar_row(bar)))?;
        }
        Ok(())
    }

    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &[Tick],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for tick in ticks {
            writeln!(writer, "{}", csv_line(&tick_row(tick)))?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activetick_fetch::parse_tick_row;
    use activetick_types::{Exchange, Quote, QuoteCondition};
    use chrono::{TimeDelta, TimeZone, Utc};

    #[test]
    fn test_wire_bars() {
        let timestamp = Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 0).unwrap();
        let bars = [Bar::new(timestamp, 215.61, 215.75, 215.5, 215.7, 412_345)];
        let mut output = Vec::new();

        WireFormatter::new().write_bars(&bars, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "20161004143000,215.61,215.75,215.5,215.7,412345\n"
        );
    }

    #[test]
    fn test_wire_ticks_decode_back() {
        let timestamp =
            Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 1).unwrap() + TimeDelta::milliseconds(2);
        let ticks: Vec<Tick> = vec![
            Quote {
                timestamp,
                bid_price: 215.6,
                ask_price: 215.62,
                bid_size: 1400,
                ask_size: 900,
                bid_exchange: Exchange::Composite,
                ask_exchange: Exchange::Composite,
                condition: QuoteCondition::REGULAR,
            }
            .into(),
        ];
        let mut output = Vec::new();

        WireFormatter::new().write_ticks(&ticks, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Q,20161004143001002,215.6,215.62,1400,900, , ,0\n");
        let fields: Vec<&str> = text.trim_end_matches('\n').split(',').collect();
        assert_eq!(parse_tick_row(&fields).unwrap(), ticks[0]);
    }
}
