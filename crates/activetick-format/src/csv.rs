//! CSV output format.

use activetick_types::{Bar, Tick};
use std::io::Write;

use crate::{FormatError, Formatter};

const BAR_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const TICK_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// CSV formatter.
///
/// Trades and quotes share one column layout; cells that do not apply to a
/// row's kind are left empty. Trade conditions are written as their four
/// codes separated by spaces.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "timestamp{d}open{d}high{d}low{d}close{d}volume")?;
        }

        for bar in bars {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                bar.timestamp.format(BAR_TIME_FORMAT),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume
            )?;
        }

        Ok(())
    }

    fn write_ticks<W: Write + Send>(
        &self,
        ticks: &[Tick],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "timestamp{d}type{d}price{d}size{d}exchange{d}conditions{d}\
                 bid_price{d}ask_price{d}bid_size{d}ask_size{d}bid_exchange{d}ask_exchange"
            )?;
        }

        for tick in ticks {
            let timestamp = tick.timestamp().format(TICK_TIME_FORMAT);
            match tick {
                Tick::Trade(trade) => {
                    let conditions: Vec<String> =
                        trade.conditions.iter().map(|c| c.code().to_string()).collect();
                    writeln!(
                        writer,
                        "{timestamp}{d}trade{d}{}{d}{}{d}{}{d}{}{d}{d}{d}{d}{d}{d}",
                        trade.price,
                        trade.size,
                        trade.exchange,
                        conditions.join(" "),
                    )?;
                }
                Tick::Quote(quote) => {
                    writeln!(
                        writer,
                        "{timestamp}{d}quote{d}{d}{d}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                        quote.condition.code(),
                        quote.bid_price,
                        quote.ask_price,
                        quote.bid_size,
                        quote.ask_size,
                        quote.bid_exchange,
                        quote.ask_exchange,
                    )?;
                }
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
