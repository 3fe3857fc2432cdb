// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared row fixtures for integration tests.

#![allow(dead_code)]

use chart_core::Row;
use chrono::{Duration, NaiveDate};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// 31 days of forecast-shaped data: actual, ARIMA_M, TSF with a LOW/HIGH zone.
pub fn forecast_rows() -> Vec<Row> {
    let start = day(2025, 1, 1);
    (0..31)
        .map(|i| {
            let f = i as f64;
            let base = 100.0 + (f / 5.0).sin() * 15.0 + f * 0.4;
            let tsf = base + 3.0;
            Row::new(start + Duration::days(i))
                .with("actual", base + (if i % 3 == 0 { 2.0 } else { -1.0 }) * (5.0 + (i % 5) as f64))
                .with("ARIMA_M", base + ((i % 7) as f64 - 3.0) * 0.8)
                .with("TSF", tsf)
                .with("LOW", tsf - 8.0)
                .with("HIGH", tsf + 8.0)
        })
        .collect()
}
