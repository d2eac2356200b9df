//! Route and query-string construction.
//!
//! Times are sent as 14-digit `YYYYMMDDhhmmss` values. The server ignores
//! milliseconds in requests, so they are never sent.

use activetick_types::{BarRequest, TickRequest, format_wire_time};
use reqwest::Url;

/// Route of the historical bar endpoint.
pub const BAR_ROUTE: &str = "/barData";

/// Route of the historical tick endpoint.
pub const TICK_ROUTE: &str = "/tickData";

/// Query parameters of one request, in the order they are encoded.
pub type Query = Vec<(&'static str, String)>;

/// Builds the `/barData` query for a bar request.
///
/// # Example
///
/// ```
/// use activetick_fetch::url::bar_query;
/// use activetick_types::{BarRequest, HistoryType};
/// use chrono::{TimeZone, Utc};
///
/// let begin = Utc.with_ymd_and_hms(2016, 10, 4, 14, 30, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2016, 10, 4, 14, 40, 0).unwrap();
/// let query = bar_query(&BarRequest::new("SPY", HistoryType::MINUTE, begin, end));
/// assert_eq!(query[0], ("symbol", "SPY".to_string()));
/// assert_eq!(query[3], ("beginTime", "20161004143000".to_string()));
/// ```
#[must_use]
pub fn bar_query(request: &BarRequest) -> Query {
    vec![
        ("symbol", request.symbol.clone()),
        ("historyType", request.history_type.code().to_string()),
        (
            "intradayMinutes",
            request.history_type.intraday_minutes().to_string(),
        ),
        ("beginTime", format_wire_time(request.begin)),
        ("endTime", format_wire_time(request.end)),
    ]
}

/// Builds the `/tickData` query for a tick request.
#[must_use]
pub fn tick_query(request: &TickRequest) -> Query {
    vec![
        ("symbol", request.symbol.clone()),
        ("trades", flag(request.trades).to_string()),
        ("quotes", flag(request.quotes).to_string()),
        ("beginTime", format_wire_time(request.begin)),
        ("endTime", format_wire_time(request.end)),
    ]
}

/// Joins `route` onto `endpoint` and appends the URL-encoded query.
#[must_use]
pub fn route_url(endpoint: &Url, route: &str, query: &[(&str, String)]) -> Url {
    let mut url = endpoint.clone();
    let path = format!("{}{}", endpoint.path().trim_end_matches('/'), route);
    url.set_path(&path);
    url.set_query(None);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }
    url
}

const fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}
