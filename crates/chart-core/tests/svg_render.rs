// File: crates/chart-core/tests/svg_render.rs
// Purpose: SVG output for single charts and the standard panel layouts.

mod common;

use chart_core::block::{dashboard, three_up};
use chart_core::svg::render_svg;
use chart_core::{compose, Composer, Dimensions, Margins, SeriesDescriptor, Theme};

#[test]
fn chart_svg_contains_every_layer() {
    let rows = common::forecast_rows();
    let scene = compose(
        &rows,
        &chart_core::block::seasonal_zone_series(),
        Dimensions::new(600.0, 260.0),
        Margins::default(),
    )
    .expect("compose");
    let svg = render_svg(&scene, Some(Theme::light().background));

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"260\""));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(r#"<g transform="translate(40,16)">"#));
    assert_eq!(svg.matches("<line ").count(), 6, "five grid lines plus the axis");
    assert!(svg.contains(r##"fill="#22c55e" fill-opacity="0.2" stroke="none""##));
    assert!(svg.contains(r##"stroke="#111827" stroke-width="2.25""##));
    assert!(svg.contains(r##"stroke="#d97706" stroke-width="1.75""##));
    assert!(svg.contains(">2025-01-01</text>"));
    assert!(svg.contains(">2025-01-31</text>"));

    let band_at = svg.find("stroke=\"none\"").unwrap();
    let line_at = svg.find("stroke-width=\"2.25\"").unwrap();
    assert!(band_at < line_at, "band painted beneath lines");
}

#[test]
fn dashed_forecast_emits_dasharray() {
    let rows = common::forecast_rows();
    let series = vec![
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("ARIMA_M").with_dashed(true),
    ];
    let scene = compose(&rows, &series, Dimensions::new(400.0, 200.0), Margins::default()).unwrap();
    let svg = render_svg(&scene, None);
    assert_eq!(svg.matches("stroke-dasharray=\"4 3\"").count(), 1);
    assert!(!svg.contains("<rect"));
}

#[test]
fn layouts_render_titles_and_panels() {
    let rows = common::forecast_rows();
    let composer = Composer::default();

    let three = three_up(1200.0, 260.0, Margins::default()).render_svg(&rows, &composer).unwrap();
    assert_eq!(three.matches("<g transform=").count(), 3);
    assert!(three.contains("Gold Line &amp; Green Zone"));

    let dash = dashboard(1200.0, 220.0, 360.0).render_svg(&rows, &composer).unwrap();
    assert_eq!(dash.matches("<g transform=").count(), 4);
    assert!(dash.contains("Targeted Seasonal Forecast View"));
}
