// File: crates/chart-examples/src/bin/forecast_band.rs
// Summary: Minimal example that renders an actual/forecast chart with a confidence band to SVG.

use chart_core::svg::render_svg;
use chart_core::{compose, Dimensions, Margins, Row, SeriesDescriptor};
use chrono::{Duration, NaiveDate};

fn main() -> chart_core::Result<()> {
    let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default();
    let rows: Vec<Row> = (0..14)
        .map(|i| {
            let f = i as f64;
            let tsf = 50.0 + f * 1.5;
            // actuals stop halfway; forecast continues
            let actual = (i < 8).then(|| tsf + (f * 1.3).sin() * 3.0);
            Row::new(start + Duration::days(i))
                .with("actual", actual)
                .with("TSF", tsf)
                .with("LOW", tsf - 4.0 - f * 0.3)
                .with("HIGH", tsf + 4.0 + f * 0.3)
        })
        .collect();

    let series = vec![
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("TSF").with_dashed(true),
        SeriesDescriptor::band("LOW", "HIGH"),
    ];
    let scene = compose(&rows, &series, Dimensions::new(640.0, 260.0), Margins::default())?;

    let out = std::path::PathBuf::from("target/out/example_forecast_band.svg");
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out, render_svg(&scene, Some(chart_core::Theme::light().background)))?;
    println!("Wrote {}", out.display());
    Ok(())
}
