//! Output destinations and formatter selection for the atclient CLI.

use activetick_lib::prelude::*;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Where and how fetched records are written.
#[derive(Debug, Clone)]
pub(crate) struct Output {
    path: Option<PathBuf>,
    format: OutputFormat,
    pretty: bool,
}

impl Output {
    pub(crate) const fn new(path: Option<PathBuf>, format: OutputFormat, pretty: bool) -> Self {
        Self {
            path,
            format,
            pretty,
        }
    }

    /// Writes bars in the selected format.
    pub(crate) fn write_bars(&self, bars: &[Bar]) -> Result<()> {
        let mut writer = self.writer()?;
        match self.format {
            OutputFormat::Csv => CsvFormatter::new().write_bars(bars, &mut writer)?,
            OutputFormat::Tsv => CsvFormatter::tsv().write_bars(bars, &mut writer)?,
            OutputFormat::Wire => WireFormatter::new().write_bars(bars, &mut writer)?,
            OutputFormat::Json => self.json().write_bars(bars, &mut writer)?,
            OutputFormat::Ndjson => JsonFormatter::ndjson().write_bars(bars, &mut writer)?,
        }
        self.finish(writer, bars.len())
    }

    /// Writes ticks in the selected format.
    pub(crate) fn write_ticks(&self, ticks: &[Tick]) -> Result<()> {
        let mut writer = self.writer()?;
        match self.format {
            OutputFormat::Csv => CsvFormatter::new().write_ticks(ticks, &mut writer)?,
            OutputFormat::Tsv => CsvFormatter::tsv().write_ticks(ticks, &mut writer)?,
            OutputFormat::Wire => WireFormatter::new().write_ticks(ticks, &mut writer)?,
            OutputFormat::Json => self.json().write_ticks(ticks, &mut writer)?,
            OutputFormat::Ndjson => JsonFormatter::ndjson().write_ticks(ticks, &mut writer)?,
        }
        self.finish(writer, ticks.len())
    }

    const fn json(&self) -> JsonFormatter {
        JsonFormatter::new().with_pretty(self.pretty)
    }

    fn writer(&self) -> Result<BufWriter<Box<dyn Write + Send>>> {
        let inner: Box<dyn Write + Send> = match &self.path {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(std::io::stdout()),
        };
        Ok(BufWriter::new(inner))
    }

    fn finish(&self, mut writer: BufWriter<Box<dyn Write + Send>>, records: usize) -> Result<()> {
        writer.flush().context("Failed to flush output")?;
        if let Some(path) = &self.path {
            tracing::info!(records, path = %path.display(), "output written");
        }
        Ok(())
    }
}
