// File: crates/demo/src/sample.rs
// Summary: Deterministic 31-day demo series (actual, ARIMA_M, TSF and its LOW/HIGH zone).

use chart_core::Row;
use chrono::{Duration, NaiveDate};

pub const DEMO_DAYS: i64 = 31;

fn one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn demo_rows() -> Vec<Row> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    (0..DEMO_DAYS)
        .map(|i| {
            let f = i as f64;
            let base = 100.0 + (f / 4.0).sin() * 12.0 + f * 0.35;
            let wobble = if i % 2 == 1 { 2.0 } else { -1.0 };
            let actual = base + ((i % 5) - 2) as f64 * 1.6 + wobble;
            let tsf = base + 2.5;
            let arima = base + ((i % 7) - 3) as f64 * 0.9;
            Row::new(start + Duration::days(i))
                .with("actual", one_decimal(actual))
                .with("ARIMA_M", one_decimal(arima))
                .with("TSF", one_decimal(tsf))
                .with("LOW", one_decimal(tsf - 7.5))
                .with("HIGH", one_decimal(tsf + 7.5))
        })
        .collect()
}
