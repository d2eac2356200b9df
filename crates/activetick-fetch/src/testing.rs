//! In-memory transports for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use activetick_types::{Bar, Tick, TickKind, format_wire_time, parse_wire_time};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::Url;

use crate::encode::{bar_row, csv_line, tick_row};
use crate::transport::{HttpResponse, Transport, TransportError};
use crate::url::{BAR_ROUTE, TICK_ROUTE};

/// Replays a fixed sequence of responses and records every URL requested.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requests: Mutex<Vec<Url>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse::new(status, body.to_string())))
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.push(Err(message.to_string()))
    }

    fn push(self, entry: Result<HttpResponse, String>) -> Self {
        self.script.lock().unwrap().push_back(entry);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(message.into()),
            None => Err("script exhausted".into()),
        }
    }
}

/// Serves a fixed dataset the way the data server pages it.
///
/// When more than `bar_cap` bars fall in `[begin, end]`, only the latest
/// `bar_cap` are sent, in ascending order. Ticks in `[begin, end + 1s)` are
/// truncated to the earliest `tick_cap`. Query times are whole seconds.
#[derive(Debug)]
pub(crate) struct FakeServer {
    bars: Vec<Bar>,
    ticks: Vec<Tick>,
    bar_cap: usize,
    tick_cap: usize,
    requests: Mutex<Vec<Url>>,
}

impl FakeServer {
    pub(crate) fn new(bars: Vec<Bar>, ticks: Vec<Tick>, bar_cap: usize, tick_cap: usize) -> Self {
        Self {
            bars,
            ticks,
            bar_cap,
            tick_cap,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn bars(bars: Vec<Bar>, cap: usize) -> Self {
        Self::new(bars, Vec::new(), cap, usize::MAX)
    }

    pub(crate) fn ticks(ticks: Vec<Tick>, cap: usize) -> Self {
        Self::new(Vec::new(), ticks, usize::MAX, cap)
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Query value of the `index`th request.
    pub(crate) fn param(&self, index: usize, key: &str) -> Option<String> {
        self.requests()
            .get(index)?
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    fn serve_bars(&self, url: &Url) -> Result<String, String> {
        let begin = time_param(url, "beginTime")?;
        let end = time_param(url, "endTime")?;
        let matching: Vec<&Bar> = self
            .bars
            .iter()
            .filter(|b| b.timestamp >= begin && b.timestamp <= end)
            .collect();
        let skip = matching.len().saturating_sub(self.bar_cap);
        Ok(body(matching[skip..].iter().map(|b| bar_row(b))))
    }

    fn serve_ticks(&self, url: &Url) -> Result<String, String> {
        let begin = time_param(url, "beginTime")?;
        let end = time_param(url, "endTime")? + TimeDelta::seconds(1);
        let trades = flag_param(url, "trades")?;
        let quotes = flag_param(url, "quotes")?;
        let rows = self
            .ticks
            .iter()
            .filter(|t| t.timestamp() >= begin && t.timestamp() < end)
            .filter(|t| match t.kind() {
                TickKind::Trade => trades,
                TickKind::Quote => quotes,
            })
            .take(self.tick_cap)
            .map(tick_row);
        Ok(body(rows))
    }
}

#[async_trait]
impl Transport for FakeServer {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        let served = match url.path() {
            BAR_ROUTE => self.serve_bars(url),
            TICK_ROUTE => self.serve_ticks(url),
            _ => return Ok(HttpResponse::new(404, "not found")),
        };
        Ok(match served {
            Ok(body) => HttpResponse::new(200, body),
            Err(message) => HttpResponse::new(400, message),
        })
    }
}

fn body(rows: impl Iterator<Item = Vec<String>>) -> String {
    rows.map(|row| csv_line(&row) + "\n").collect()
}

fn param(url: &Url, key: &str) -> Result<String, String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .ok_or_else(|| format!("missing {key}"))
}

fn time_param(url: &Url, key: &str) -> Result<DateTime<Utc>, String> {
    let value = param(url, key)?;
    parse_wire_time(&value).map_err(|e| e.to_string())
}

fn flag_param(url: &Url, key: &str) -> Result<bool, String> {
    match param(url, key)?.as_str() {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(format!("bad {key} flag {other:?}")),
    }
}

/// One bar per minute starting at `start`, with volume equal to the index.
pub(crate) fn minute_bars(start: DateTime<Utc>, count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let price = 100.0 + i as f64 / 100.0;
            Bar::new(
                start + TimeDelta::minutes(i as i64),
                price,
                price + 0.05,
                price - 0.05,
                price,
                i as i64,
            )
        })
        .collect()
}

/// Formats a time the way requests carry it.
pub(crate) fn wire(time: DateTime<Utc>) -> String {
    format_wire_time(time)
}
