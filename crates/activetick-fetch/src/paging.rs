//! Pagination over the server's per-response row caps.
//!
//! The two endpoints truncate from opposite ends:
//!
//! - `/barData` keeps the **latest** rows of an over-full window, so the bar
//!   pager walks backward, shrinking the window end below the oldest bar it
//!   has seen.
//! - `/tickData` keeps the **earliest** rows, so the tick pager walks forward,
//!   moving the window begin to the last second it has seen. Requests are
//!   whole seconds while ticks carry milliseconds, so the accumulated tail
//!   inside that second is dropped and re-fetched by the next page.
//!
//! Pages are fetched strictly one at a time. Any page error aborts the loop
//! and discards everything accumulated so far.

use activetick_types::{Bar, BarRequest, Tick, TickRequest, truncate_to_second};
use chrono::{DateTime, TimeDelta, Utc};

use crate::client::{Client, FetchError};
use crate::transport::{ClientConfig, HttpTransport, Transport};

/// Server row cap for one `/barData` response.
pub const MAX_BARS_PER_PAGE: usize = 20_000;

/// Server row cap for one `/tickData` response.
pub const MAX_TICKS_PER_PAGE: usize = 100_000;

/// Page sizes at which a response is considered truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Bars per page.
    pub bars: usize,
    /// Ticks per page.
    pub ticks: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            bars: MAX_BARS_PER_PAGE,
            ticks: MAX_TICKS_PER_PAGE,
        }
    }
}

/// A [`Client`] that follows server truncation until a window is complete.
#[derive(Debug, Clone)]
pub struct PagingClient<T = HttpTransport> {
    client: Client<T>,
    limits: PageLimits,
}

impl<T: Transport> PagingClient<T> {
    /// Wraps `client` with the server's default page caps.
    pub fn new(client: Client<T>) -> Self {
        Self::with_limits(client, PageLimits::default())
    }

    /// Wraps `client` with custom page caps.
    pub const fn with_limits(client: Client<T>, limits: PageLimits) -> Self {
        Self { client, limits }
    }

    /// Returns the single-request client.
    pub const fn client(&self) -> &Client<T> {
        &self.client
    }

    /// Returns the page caps in use.
    pub const fn limits(&self) -> PageLimits {
        self.limits
    }

    /// Fetches every bar in `[begin, end]`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the first page error; no partial result is returned.
    pub async fn fetch_bars(&self, request: &BarRequest) -> Result<Vec<Bar>, FetchError> {
        let mut window = request.clone();
        // Newest page first
        let mut pages: Vec<Vec<Bar>> = Vec::new();

        loop {
            let page = self.client.fetch_bars(&window).await?;
            let Some(oldest) = page.first().map(|bar| bar.timestamp) else {
                break;
            };
            let page_len = page.len();
            pages.push(page);

            tracing::debug!(
                page = pages.len(),
                rows = page_len,
                oldest = %oldest,
                end = %window.end,
                "fetched bar page"
            );

            if page_len < self.limits.bars {
                break;
            }
            if oldest >= window.end {
                tracing::warn!(
                    symbol = %request.symbol,
                    oldest = %oldest,
                    "bar page is full but the window cannot shrink; result may be incomplete"
                );
                break;
            }
            window = window.with_end(oldest - TimeDelta::minutes(1));
        }

        let bars: Vec<Bar> = pages.into_iter().rev().flatten().collect();
        tracing::info!(
            symbol = %request.symbol,
            bars = bars.len(),
            "fetched bars"
        );
        Ok(bars)
    }

    /// Fetches every trade and/or quote in `[begin, end]`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns the first page error; no partial result is returned.
    pub async fn fetch_ticks(&self, request: &TickRequest) -> Result<Vec<Tick>, FetchError> {
        let mut window = request.clone();
        let mut ticks: Vec<Tick> = Vec::new();
        let mut pages = 0usize;

        loop {
            let page = self.client.fetch_ticks(&window).await?;
            let Some(last) = page.last().map(Tick::timestamp) else {
                break;
            };
            let page_len = page.len();
            ticks.extend(page);
            pages += 1;

            let latest_second = truncate_to_second(last);
            tracing::debug!(
                page = pages,
                rows = page_len,
                latest_second = %latest_second,
                begin = %window.begin,
                "fetched tick page"
            );

            if page_len < self.limits.ticks {
                break;
            }
            if latest_second <= window.begin {
                tracing::warn!(
                    symbol = %request.symbol,
                    second = %latest_second,
                    "a single second holds more ticks than one page; result is truncated"
                );
                break;
            }

            let trimmed = trim_tail(&mut ticks, latest_second);
            tracing::debug!(trimmed, "dropped ticks from partial second");
            window = window.with_begin(latest_second);
        }

        tracing::info!(
            symbol = %request.symbol,
            ticks = ticks.len(),
            pages,
            "fetched ticks"
        );
        Ok(ticks)
    }
}

impl PagingClient {
    /// Creates a paging client backed by `reqwest` with default page caps.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the HTTP client cannot
    /// be created.
    pub fn from_config(config: ClientConfig) -> Result<Self, FetchError> {
        Ok(Self::new(Client::new(config)?))
    }
}

/// Removes trailing ticks at or after `boundary` and returns how many were
/// removed.
///
/// Scans from the end and stops at the first tick strictly before
/// `boundary`. Empties the vector if every tick qualifies.
pub fn trim_tail(ticks: &mut Vec<Tick>, boundary: DateTime<Utc>) -> usize {
    let keep = ticks
        .iter()
        .rposition(|tick| tick.timestamp() < boundary)
        .map_or(0, |i| i + 1);
    let removed = ticks.len() - keep;
    ticks.truncate(keep);
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeServer, ScriptedTransport, minute_bars, wire};
    use activetick_types::{Exchange, HistoryType, Quote, QuoteCondition, TickKind, Trade};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 0).unwrap()
    }

    fn at(seconds: i64, millis: i64) -> DateTime<Utc> {
        t0() + TimeDelta::seconds(seconds) + TimeDelta::milliseconds(millis)
    }

    fn trade(time: DateTime<Utc>, size: i64) -> Tick {
        Trade::new(time, 215.62, size, Exchange::NyseArca).into()
    }

    fn quote(time: DateTime<Utc>, bid_size: i64) -> Tick {
        Quote {
            timestamp: time,
            bid_price: 215.61,
            ask_price: 215.62,
            bid_size,
            ask_size: 100,
            bid_exchange: Exchange::Composite,
            ask_exchange: Exchange::NyseArca,
            condition: QuoteCondition::REGULAR,
        }
        .into()
    }

    fn paging<T: Transport>(transport: T, bars: usize, ticks: usize) -> PagingClient<T> {
        let client = Client::with_transport(transport, "http://localhost:5000").unwrap();
        PagingClient::with_limits(client, PageLimits { bars, ticks })
    }

    fn bar_request(begin: DateTime<Utc>, end: DateTime<Utc>) -> BarRequest {
        BarRequest::new("SPY", HistoryType::MINUTE, begin, end)
    }

    fn assert_ascending<I: IntoIterator<Item = DateTime<Utc>>>(times: I) {
        let times: Vec<_> = times.into_iter().collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "not ascending: {times:?}");
    }

    #[test]
    fn test_default_limits() {
        let limits = PageLimits::default();
        assert_eq!(limits.bars, 20_000);
        assert_eq!(limits.ticks, 100_000);
    }

    #[tokio::test]
    async fn test_spy_ten_minute_window_single_page() {
        let bars = minute_bars(t0(), 10);
        let server = FakeServer::bars(bars.clone(), MAX_BARS_PER_PAGE);
        let client = paging(server, MAX_BARS_PER_PAGE, MAX_TICKS_PER_PAGE);

        let request = bar_request(t0(), Utc.with_ymd_and_hms(2016, 10, 4, 14, 40, 0).unwrap());
        let fetched = client.fetch_bars(&request).await.unwrap();

        assert_eq!(fetched, bars);
        let server = client.client().transport();
        assert_eq!(server.requests().len(), 1);
        assert_eq!(server.param(0, "symbol").as_deref(), Some("SPY"));
        assert_eq!(server.param(0, "historyType").as_deref(), Some("0"));
        assert_eq!(server.param(0, "intradayMinutes").as_deref(), Some("1"));
        assert_eq!(server.param(0, "beginTime").as_deref(), Some("20161004143000"));
        assert_eq!(server.param(0, "endTime").as_deref(), Some("20161004144000"));
    }

    #[tokio::test]
    async fn test_bars_across_pages() {
        let bars = minute_bars(t0(), 23);
        let end = t0() + TimeDelta::minutes(30);
        let client = paging(FakeServer::bars(bars.clone(), 5), 5, MAX_TICKS_PER_PAGE);

        let fetched = client.fetch_bars(&bar_request(t0(), end)).await.unwrap();
        assert_eq!(fetched, bars);

        // 5 + 5 + 5 + 5 + 3
        let server = client.client().transport();
        assert_eq!(server.requests().len(), 5);
        // Second window ends one minute before the oldest bar of the first page
        assert_eq!(server.param(1, "endTime"), Some(wire(bars[17].timestamp)));
        // Begin never moves
        for i in 0..5 {
            assert_eq!(server.param(i, "beginTime"), Some(wire(t0())));
        }
    }

    #[tokio::test]
    async fn test_exactly_full_bar_page_triggers_one_more_fetch() {
        let bars = minute_bars(t0(), MAX_BARS_PER_PAGE);
        let end = t0() + TimeDelta::minutes(MAX_BARS_PER_PAGE as i64);
        let client = paging(
            FakeServer::bars(bars.clone(), MAX_BARS_PER_PAGE),
            MAX_BARS_PER_PAGE,
            MAX_TICKS_PER_PAGE,
        );

        let fetched = client.fetch_bars(&bar_request(t0(), end)).await.unwrap();
        assert_eq!(fetched.len(), MAX_BARS_PER_PAGE);
        assert_eq!(client.client().transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_one_short_bar_page_is_final() {
        let bars = minute_bars(t0(), MAX_BARS_PER_PAGE - 1);
        let end = t0() + TimeDelta::minutes(MAX_BARS_PER_PAGE as i64);
        let client = paging(
            FakeServer::bars(bars, MAX_BARS_PER_PAGE),
            MAX_BARS_PER_PAGE,
            MAX_TICKS_PER_PAGE,
        );

        let fetched = client.fetch_bars(&bar_request(t0(), end)).await.unwrap();
        assert_eq!(fetched.len(), MAX_BARS_PER_PAGE - 1);
        assert_eq!(client.client().transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_bar_window() {
        let client = paging(FakeServer::bars(Vec::new(), 5), 5, 5);
        let fetched = client
            .fetch_bars(&bar_request(t0(), t0() + TimeDelta::hours(1)))
            .await
            .unwrap();
        assert!(fetched.is_empty());
        assert_eq!(client.client().transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_bar_window_that_cannot_shrink() {
        // A full page whose oldest bar sits at the window end
        let body = "20161004143000,1,1,1,1,1\n20161004143000,1,1,1,1,2\n";
        let transport = ScriptedTransport::new().respond(200, body);
        let client = paging(transport, 2, 2);

        let fetched = client.fetch_bars(&bar_request(t0(), t0())).await.unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(client.client().transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_bar_error_on_second_page_discards_everything() {
        let transport = ScriptedTransport::new()
            .respond(200, "20161004143100,1,1,1,1,1\n20161004143200,1,1,1,1,1\n")
            .respond(500, "internal error");
        let client = paging(transport, 2, 2);

        let err = client
            .fetch_bars(&bar_request(t0(), t0() + TimeDelta::minutes(5)))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Server { status: 500, .. }));
    }

    #[test]
    fn test_trim_tail() {
        let mut ticks = vec![
            trade(at(0, 100), 1),
            trade(at(1, 200), 2),
            trade(at(2, 300), 3),
            trade(at(2, 700), 4),
        ];
        let removed = trim_tail(&mut ticks, at(2, 0));
        assert_eq!(removed, 2);
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].timestamp(), at(1, 200));
    }

    #[test]
    fn test_trim_tail_can_empty_accumulator() {
        let mut ticks = vec![trade(at(5, 0), 1), trade(at(5, 999), 2)];
        assert_eq!(trim_tail(&mut ticks, at(5, 0)), 2);
        assert!(ticks.is_empty());

        let mut empty: Vec<Tick> = Vec::new();
        assert_eq!(trim_tail(&mut empty, at(5, 0)), 0);
    }

    #[tokio::test]
    async fn test_tick_splice_inside_shared_second() {
        let dataset = vec![
            trade(at(0, 100), 1),
            trade(at(1, 200), 2),
            trade(at(2, 300), 3),
            trade(at(2, 700), 4),
            trade(at(2, 900), 5),
        ];
        let client = paging(FakeServer::ticks(dataset.clone(), 4), 4, 4);
        let request = TickRequest::new("SPY", t0(), t0() + TimeDelta::seconds(10));

        let fetched = client.fetch_ticks(&request).await.unwrap();
        assert_eq!(fetched, dataset);

        let server = client.client().transport();
        assert_eq!(server.requests().len(), 2);
        assert_eq!(server.param(1, "beginTime"), Some(wire(at(2, 0))));
        assert_eq!(server.param(1, "endTime"), Some(wire(t0() + TimeDelta::seconds(10))));
    }

    #[tokio::test]
    async fn test_ticks_across_many_pages() {
        let mut dataset = Vec::new();
        for i in 0..40 {
            let time = at(i / 3, (i % 3) * 250);
            dataset.push(if i % 2 == 0 { trade(time, i) } else { quote(time, i) });
        }
        let client = paging(FakeServer::ticks(dataset.clone(), 7), 7, 7);
        let request = TickRequest::new("SPY", t0(), t0() + TimeDelta::minutes(1));

        let fetched = client.fetch_ticks(&request).await.unwrap();
        assert_eq!(fetched, dataset);
        assert_ascending(fetched.iter().map(Tick::timestamp));
    }

    #[tokio::test]
    async fn test_tick_flags_carry_across_pages() {
        let dataset = vec![
            quote(at(0, 0), 1),
            trade(at(0, 500), 1),
            quote(at(1, 0), 2),
            quote(at(2, 0), 3),
            quote(at(3, 0), 4),
        ];
        let client = paging(FakeServer::ticks(dataset, 2), 2, 2);
        let request =
            TickRequest::new("SPY", t0(), t0() + TimeDelta::seconds(10)).with_trades(false);

        let fetched = client.fetch_ticks(&request).await.unwrap();
        assert_eq!(fetched.len(), 4);
        assert!(fetched.iter().all(|t| t.kind() == TickKind::Quote));

        let server = client.client().transport();
        assert!(server.requests().len() > 1);
        for i in 0..server.requests().len() {
            assert_eq!(server.param(i, "trades").as_deref(), Some("0"));
            assert_eq!(server.param(i, "quotes").as_deref(), Some("1"));
        }
    }

    #[tokio::test]
    async fn test_saturated_first_second_terminates() {
        // Cap is hit inside one second, after the window begin
        let dataset: Vec<Tick> = (0..6).map(|i| trade(at(5, i * 10), i)).collect();
        let client = paging(FakeServer::ticks(dataset.clone(), 4), 4, 4);
        let request = TickRequest::new("SPY", t0(), t0() + TimeDelta::seconds(10));

        let fetched = client.fetch_ticks(&request).await.unwrap();
        // First page is trimmed away entirely and re-fetched from second 5
        assert_eq!(fetched, dataset[..4].to_vec());
        assert_eq!(client.client().transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_tick_window() {
        let client = paging(FakeServer::ticks(Vec::new(), 4), 4, 4);
        let request = TickRequest::new("SPY", t0(), t0() + TimeDelta::seconds(10));
        assert!(client.fetch_ticks(&request).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tick_error_aborts_paging() {
        let transport = ScriptedTransport::new()
            .respond(200, "T,20161004143000100,1,1,P,0,0,0,0\nT,20161004143001100,1,1,P,0,0,0,0\n")
            .respond(200, "X,20161004143001100,1,1,P,0,0,0,0\n");
        let client = paging(transport, 2, 2);
        let request = TickRequest::new("SPY", t0(), t0() + TimeDelta::seconds(10));

        let err = client.fetch_ticks(&request).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn prop_bar_pager_returns_whole_window(
            count in 0usize..60,
            cap in 1usize..12,
        ) {
            // Bars start five minutes before the window and may run past its end
            let begin = t0() + TimeDelta::minutes(5);
            let end = begin + TimeDelta::minutes(40);
            let bars = minute_bars(t0(), count);
            let expected: Vec<Bar> = bars
                .iter()
                .copied()
                .filter(|b| b.timestamp >= begin && b.timestamp <= end)
                .collect();
            let client = paging(FakeServer::bars(bars, cap), cap, MAX_TICKS_PER_PAGE);

            let fetched = runtime().block_on(client.fetch_bars(&bar_request(begin, end))).unwrap();
            prop_assert!(fetched.iter().all(|b| b.timestamp >= begin && b.timestamp <= end));
            prop_assert_eq!(fetched, expected);
        }

        #[test]
        fn prop_tick_pager_has_no_gaps_or_duplicates(
            gaps in prop::collection::vec(0i64..700, 0..80),
            cap in 2usize..10,
            outside in 0i64..6,
        ) {
            // Cumulative millisecond offsets, with fewer than `cap` ticks in any
            // one second so no second can saturate a page
            let mut offset = 0;
            let mut dataset = Vec::new();
            for (i, gap) in gaps.iter().enumerate() {
                offset += gap;
                let time = t0() + TimeDelta::milliseconds(offset);
                let per_second = dataset
                    .iter()
                    .filter(|t: &&Tick| truncate_to_second(t.timestamp()) == truncate_to_second(time))
                    .count();
                if per_second + 1 < cap {
                    dataset.push(trade(time, i as i64));
                }
            }
            let end = t0() + TimeDelta::minutes(2);

            // Surround the window with ticks the pager must never return
            let mut served: Vec<Tick> = (1..=outside)
                .rev()
                .map(|i| trade(t0() - TimeDelta::milliseconds(i * 250), -i))
                .collect();
            served.extend(dataset.iter().copied());
            served.extend((0..outside).map(|i| trade(end + TimeDelta::seconds(1 + i), -i)));

            let client = paging(FakeServer::ticks(served, cap), MAX_BARS_PER_PAGE, cap);
            let request = TickRequest::new("SPY", t0(), end);

            let fetched = runtime().block_on(client.fetch_ticks(&request)).unwrap();
            prop_assert!(fetched.iter().all(|t| t.timestamp() >= t0() && t.timestamp() <= end));
            prop_assert_eq!(fetched, dataset);
        }
    }
}
