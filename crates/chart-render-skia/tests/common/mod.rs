// File: crates/chart-render-skia/tests/common/mod.rs
// Purpose: Small deterministic scenes for raster tests.

#![allow(dead_code)]

use chart_core::{compose, Dimensions, Margins, Row, SceneGraph, SeriesDescriptor};
use chrono::{Duration, NaiveDate};

pub fn forecast_scene(width: f64, height: f64) -> SceneGraph {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("date");
    let rows: Vec<Row> = (0..10)
        .map(|i| {
            let f = i as f64;
            let base = 2.0 + (f * 0.6).sin();
            Row::new(start + Duration::days(i))
                .with("actual", if i == 4 { None } else { Some(base) })
                .with("TSF", base + 0.3)
                .with("LOW", base - 0.5)
                .with("HIGH", base + 1.0)
        })
        .collect();
    let series = vec![
        SeriesDescriptor::band("LOW", "HIGH"),
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("TSF").with_dashed(true),
    ];
    compose(&rows, &series, Dimensions::new(width, height), Margins::default()).expect("compose")
}
