#![allow(dead_code)]

use serde::{de::DeserializeOwned, Deserialize};
use stockind_core::Quote;

/// Expected values computed independently for the quote fixture.
///
/// EMA(20), RSI(14), MACD(12, 26, 9) and Stochastic RSI(14).
#[derive(Debug, Deserialize)]
pub struct RefRow {
    pub index: usize,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
    pub stoch_rsi: Option<f64>,
}

const QUOTES_PATH: &str = "tests/fixtures/data/quotes.csv";
const EXPECTED_PATH: &str = "tests/fixtures/data/expected.csv";

/// Load the daily quote fixture.
pub fn load_quotes() -> Vec<Quote> {
    load_records(QUOTES_PATH, "invalid quote record")
}

/// Load the reference values.
pub fn load_expected() -> Vec<RefRow> {
    load_records(EXPECTED_PATH, "invalid reference record")
}

/// Assert two optional values are both absent or within tolerance.
pub fn assert_near(actual: Option<f64>, expected: Option<f64>, tolerance: f64, context: &str) {
    match (actual, expected) {
        (None, None) => {}
        (Some(actual), Some(expected)) => {
            let diff = (actual - expected).abs();
            assert!(
                diff <= tolerance,
                "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
            );
        }
        _ => panic!("{context}: expected {expected:?}, got {actual:?}"),
    }
}

fn load_records<T: DeserializeOwned>(path: &str, msg: &str) -> Vec<T> {
    let mut reader = csv::Reader::from_path(path).expect("failed to open fixture");
    reader.deserialize().map(|r| r.expect(msg)).collect()
}
