use chrono::{Duration, TimeZone, Utc};
use stockind_core::{index_quotes, Quote};

/// Daily quotes starting 2024-01-01, one per close, with flat bars.
pub fn quotes_from_closes(closes: &[f64]) -> Vec<Quote> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    index_quotes(closes.iter().enumerate().map(|(i, &close)| {
        (start + Duration::days(i as i64), close, close, close, close, 1_000.0)
    }))
}

/// A deterministic oscillating close series.
pub fn wave(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0 + i as f64 * 0.1)
        .collect()
}
