//! Benchmarks for indicator implementations.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stockind_core::{index_quotes, Indicator, Quote};
use stockind_indicators::{Ema, Macd, Rsi, StochRsi};

fn generate_test_quotes(size: usize) -> Vec<Quote> {
    let start = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    index_quotes((0..size).map(|i| {
        let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
        (start + Duration::days(i as i64), close, close + 1.0, close - 1.0, close, 1_000.0)
    }))
}

fn benchmark_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("EMA");

    for size in [1000, 10000].iter() {
        let quotes = generate_test_quotes(*size);
        group.bench_with_input(BenchmarkId::new("standard", size), &quotes, |b, quotes| {
            let ema = Ema::new(20).unwrap();
            b.iter(|| ema.calculate(black_box(quotes)))
        });
    }

    group.finish();
}

fn benchmark_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("RSI");

    for size in [1000, 10000].iter() {
        let quotes = generate_test_quotes(*size);
        group.bench_with_input(BenchmarkId::new("standard", size), &quotes, |b, quotes| {
            let rsi = Rsi::default();
            b.iter(|| rsi.calculate(black_box(quotes)))
        });
    }

    group.finish();
}

fn benchmark_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("MACD");

    for size in [1000, 10000].iter() {
        let quotes = generate_test_quotes(*size);
        group.bench_with_input(BenchmarkId::new("standard", size), &quotes, |b, quotes| {
            let macd = Macd::default();
            b.iter(|| macd.calculate(black_box(quotes)))
        });
    }

    group.finish();
}

fn benchmark_stoch_rsi(c: &mut Criterion) {
    let mut group = c.benchmark_group("StochRSI");

    for size in [1000, 10000].iter() {
        let quotes = generate_test_quotes(*size);
        group.bench_with_input(BenchmarkId::new("chained", size), &quotes, |b, quotes| {
            let stoch = StochRsi::default();
            b.iter(|| stoch.calculate(black_box(quotes)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ema, benchmark_rsi, benchmark_macd, benchmark_stoch_rsi);
criterion_main!(benches);
