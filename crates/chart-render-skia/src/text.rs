// File: crates/chart-render-skia/src/text.rs
// Summary: Label shaper using Skia textlayout; places text by anchor and baseline.

use chart_core::scene::{Label, TextAnchor, TextBaseline};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::to_skia_color;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Roboto", "Helvetica", "Arial", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw a scene label at `(x, y)` in canvas space.
    pub fn draw_label(&self, canvas: &skia::Canvas, label: &Label, x: f32, y: f32) {
        let size = label.size as f32;
        let mut p = self.layout(&label.text, size, to_skia_color(label.color));
        let left = match label.anchor {
            TextAnchor::Start => x,
            TextAnchor::End => x - p.longest_line(),
        };
        // Paragraph draws from its top-left corner
        let top = match label.baseline {
            TextBaseline::Alphabetic => y - size * 0.8,
            TextBaseline::Middle => y - p.height() * 0.5,
        };
        p.paint(canvas, (left, top));
    }
}
