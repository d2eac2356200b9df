//! atclient - fetch historical bars and ticks from an activetick data server.

use activetick_lib::prelude::*;
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

/// Environment variable that overrides the `-v` log level.
const LOG_ENV: &str = "ATCLIENT_LOG";

/// Record kind to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DataType {
    /// Historical bars from /barData.
    Bar,
    /// Trades and quotes from /tickData.
    Tick,
}

#[derive(Debug, Parser)]
#[command(name = "atclient")]
#[command(about = "Fetch historical bars and ticks from an activetick HTTP server", long_about = None)]
#[command(version)]
struct Cli {
    /// Server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Server port
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Symbol to fetch
    #[arg(short, long, default_value = "SPY")]
    symbol: String,

    /// Type of data to fetch
    #[arg(short = 't', long = "type", value_enum, default_value = "bar")]
    data_type: DataType,

    /// Window begin (RFC 3339)
    #[arg(long, value_parser = parse_time, default_value = "2016-10-04T14:30:00Z")]
    begin_time: DateTime<Utc>,

    /// Window end (RFC 3339)
    #[arg(long, value_parser = parse_time, default_value = "2016-10-04T14:40:00Z")]
    end_time: DateTime<Utc>,

    /// Bar granularity: intraday, daily, weekly or <N>m
    #[arg(long, default_value = "intraday")]
    history: HistoryType,

    /// Minutes per intraday bar (overrides the minutes in --history)
    #[arg(long)]
    minutes: Option<u32>,

    /// Exclude trades from tick requests
    #[arg(long)]
    no_trades: bool,

    /// Exclude quotes from tick requests
    #[arg(long)]
    no_quotes: bool,

    /// Issue a single request instead of paging through the window
    #[arg(long)]
    no_paging: bool,

    /// Whole-request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,

    /// Retries per request on connection errors and 5xx responses
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Output format: csv, tsv, wire, json or ndjson
    #[arg(short, long, default_value = "csv")]
    format: OutputFormat,

    /// Pretty-print JSON array output
    #[arg(long)]
    pretty: bool,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    fn history_type(&self) -> Result<HistoryType> {
        match (self.history, self.minutes) {
            (_, Some(0)) => bail!("--minutes must be greater than zero"),
            (HistoryType::Intraday { .. }, Some(minutes)) => Ok(HistoryType::Intraday { minutes }),
            (history, Some(_)) => bail!("--minutes only applies to intraday bars, not {history}"),
            (history, None) => Ok(history),
        }
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout.map(Duration::from_secs),
            ..ClientConfig::with_endpoint(self.endpoint())
        }
    }

    fn retry_policy(&self) -> RetryPolicy {
        if self.retries == 0 {
            RetryPolicy::none()
        } else {
            RetryPolicy::default().with_max_retries(self.retries)
        }
    }
}

fn parse_time(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("invalid RFC 3339 time {s:?}: {e}"))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.end_time < cli.begin_time {
        bail!(
            "--end-time {} is before --begin-time {}",
            cli.end_time,
            cli.begin_time
        );
    }

    let client = commands::connect(&cli.client_config(), cli.retry_policy())?;
    let output = display::Output::new(cli.output.clone(), cli.format, cli.pretty);

    match cli.data_type {
        DataType::Bar => {
            let request =
                BarRequest::new(&cli.symbol, cli.history_type()?, cli.begin_time, cli.end_time);
            commands::bars(&client, &request, !cli.no_paging, &output).await
        }
        DataType::Tick => {
            let request = TickRequest::new(&cli.symbol, cli.begin_time, cli.end_time)
                .with_trades(!cli.no_trades)
                .with_quotes(!cli.no_quotes);
            if !request.trades && !request.quotes {
                bail!("--no-trades and --no-quotes together leave nothing to fetch");
            }
            commands::ticks(&client, &request, !cli.no_paging, &output).await
        }
    }
}
