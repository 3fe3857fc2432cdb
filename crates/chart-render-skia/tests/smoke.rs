// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

mod common;

use chart_render_skia::{RasterOptions, SkiaRenderer};

#[test]
fn render_smoke_png() {
    let scene = common::forecast_scene(480.0, 260.0);
    let opts = RasterOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    let mut renderer = SkiaRenderer::new();
    renderer.render_to_png(&scene, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(&scene, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (480, 260));
}
