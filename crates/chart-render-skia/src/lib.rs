// File: crates/chart-render-skia/src/lib.rs
// Summary: Headless raster rendering of scene graphs (PNG bytes, PNG files, RGBA buffers) on Skia CPU surfaces.

use anyhow::{Context, Result};
use chart_core::path::{Path, PathCommand};
use chart_core::scene::{Primitive, SceneGraph, Stroke};
use chart_core::{Color, Theme};
use skia_safe as skia;
use tracing::debug;

pub mod text;

pub use text::TextShaper;

/// Raster output settings.
pub struct RasterOptions {
    /// Device pixel ratio; the surface is `scale` times the scene size.
    pub scale: f32,
    pub background: Color,
    /// Skip text for pixel-stable output across platforms.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Theme::light().background,
            draw_labels: true,
        }
    }
}

impl RasterOptions {
    pub fn for_theme(theme: &Theme) -> Self {
        Self { background: theme.background, ..Self::default() }
    }
}

pub(crate) fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

pub struct SkiaRenderer {
    shaper: Option<TextShaper>,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: None }
    }

    fn surface_size(scene: &SceneGraph, opts: &RasterOptions) -> (i32, i32) {
        let s = opts.scale.max(0.1) as f64;
        (((scene.width * s).round() as i32).max(1), ((scene.height * s).round() as i32).max(1))
    }

    fn draw(&mut self, scene: &SceneGraph, opts: &RasterOptions) -> Result<skia::Surface> {
        let (w, h) = Self::surface_size(scene, opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        if opts.draw_labels && self.shaper.is_none() {
            self.shaper = Some(TextShaper::new());
        }
        let shaper = if opts.draw_labels { self.shaper.as_ref() } else { None };

        let canvas = surface.canvas();
        canvas.clear(to_skia_color(opts.background));
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        canvas.translate((scene.margins.left as f32, scene.margins.top as f32));
        for item in &scene.items {
            draw_primitive(canvas, item, shaper);
        }
        canvas.restore();
        debug!(width = w, height = h, items = scene.items.len(), "rasterized scene");
        Ok(surface)
    }

    /// Encode the scene as PNG bytes.
    pub fn render_to_png_bytes(&mut self, scene: &SceneGraph, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &mut self,
        scene: &SceneGraph,
        opts: &RasterOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let out = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
        Ok(())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&mut self, scene: &SceneGraph, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(scene, opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

// ---- helpers ----------------------------------------------------------------

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width as f32);
    paint.set_color(to_skia_color(stroke.color));
    if let Some([dash, gap]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[dash as f32, gap as f32], 0.0));
    }
    paint
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to((p.x as f32, p.y as f32)); }
            PathCommand::LineTo(p) => { out.line_to((p.x as f32, p.y as f32)); }
            PathCommand::Close => { out.close(); }
        }
    }
    out
}

fn draw_primitive(canvas: &skia::Canvas, item: &Primitive, shaper: Option<&TextShaper>) {
    match item {
        Primitive::GridLine(g) => {
            let y = g.y as f32;
            canvas.draw_line((g.x1 as f32, y), (g.x2 as f32, y), &stroke_paint(&g.stroke));
        }
        Primitive::AxisLine(a) => {
            canvas.draw_line(
                (a.from.x as f32, a.from.y as f32),
                (a.to.x as f32, a.to.y as f32),
                &stroke_paint(&a.stroke),
            );
        }
        Primitive::Label(l) => {
            if let Some(shaper) = shaper {
                shaper.draw_label(canvas, l, l.at.x as f32, l.at.y as f32);
            }
        }
        Primitive::Band(b) => {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia_color(b.fill));
            canvas.draw_path(&to_skia_path(&b.outline), &fill);
        }
        Primitive::Polyline(p) => {
            canvas.draw_path(&to_skia_path(&p.path), &stroke_paint(&p.stroke));
        }
    }
}
