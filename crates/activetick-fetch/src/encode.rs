//! Wire-row encoding, the inverse of [`crate::parse`].
//!
//! Encoded rows decode back to equal records: prices use the shortest
//! round-trip float representation and tick times keep their milliseconds.

use activetick_types::{
    Bar, Quote, Tick, TickKind, Trade, format_wire_time, format_wire_time_millis,
};

/// Encodes a bar as its six wire fields.
#[must_use]
pub fn bar_row(bar: &Bar) -> Vec<String> {
    vec![
        format_wire_time(bar.timestamp),
        bar.open.to_string(),
        bar.high.to_string(),
        bar.low.to_string(),
        bar.close.to_string(),
        bar.volume.to_string(),
    ]
}

/// Encodes a tick as its nine wire fields.
#[must_use]
pub fn tick_row(tick: &Tick) -> Vec<String> {
    match tick {
        Tick::Trade(trade) => trade_row(trade),
        Tick::Quote(quote) => quote_row(quote),
    }
}

fn trade_row(trade: &Trade) -> Vec<String> {
    let mut row = vec![
        TickKind::Trade.tag().to_string(),
        format_wire_time_millis(trade.timestamp),
        trade.price.to_string(),
        trade.size.to_string(),
        trade.exchange.to_string(),
    ];
    row.extend(trade.conditions.iter().map(|c| c.code().to_string()));
    row
}

fn quote_row(quote: &Quote) -> Vec<String> {
    vec![
        TickKind::Quote.tag().to_string(),
        format_wire_time_millis(quote.timestamp),
        quote.bid_price.to_string(),
        quote.ask_price.to_string(),
        quote.bid_size.to_string(),
        quote.ask_size.to_string(),
        quote.bid_exchange.to_string(),
        quote.ask_exchange.to_string(),
        quote.condition.code().to_string(),
    ]
}

/// Joins encoded fields into one comma-separated line, without a newline.
#[must_use]
pub fn csv_line(fields: &[String]) -> String {
    fields.join(",")
}
