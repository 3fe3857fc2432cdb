// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

mod common;

use chart_render_skia::{RasterOptions, SkiaRenderer};

#[test]
fn render_rgba8_buffer() {
    let scene = common::forecast_scene(320.0, 200.0);
    let mut opts = RasterOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = SkiaRenderer::new().render_to_rgba8(&scene, &opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel sits in the margin: opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn scale_multiplies_surface_size() {
    let scene = common::forecast_scene(100.0, 80.0);
    let opts = RasterOptions { scale: 2.0, draw_labels: false, ..RasterOptions::default() };
    let (_, w, h, _) = SkiaRenderer::new().render_to_rgba8(&scene, &opts).expect("rgba render");
    assert_eq!((w, h), (200, 160));
}

#[test]
fn band_tints_the_plot_area() {
    let scene = common::forecast_scene(320.0, 200.0);
    let opts = RasterOptions { draw_labels: false, ..RasterOptions::default() };
    let (px, w, _, _) = SkiaRenderer::new().render_to_rgba8(&scene, &opts).expect("rgba render");
    // some pixel inside the plot must be greenish from the translucent band
    let greenish = px
        .chunks_exact(4)
        .enumerate()
        .filter(|(i, _)| (i % w as usize) > 40)
        .any(|(_, p)| p[1] > p[0] && p[1] > p[2]);
    assert!(greenish);
}
