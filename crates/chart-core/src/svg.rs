// File: crates/chart-core/src/svg.rs
// Summary: SVG markup for scene graphs (single charts and multi-panel layouts).

use std::fmt::Write as _;

use crate::path::{Path, PathCommand};
use crate::scene::{Label, Primitive, SceneGraph, Stroke, TextAnchor, TextBaseline};
use crate::theme::{Color, Theme};

const FONT_FAMILY: &str = "system-ui, -apple-system, Segoe UI, Roboto, sans-serif";
/// Title strip height above each panel in a layout.
pub const TITLE_HEIGHT: f64 = 24.0;

/// A scene placed at `(x, y)` of a larger document, with an optional title.
pub struct Panel<'a> {
    pub title: Option<&'a str>,
    pub x: f64,
    pub y: f64,
    pub scene: &'a SceneGraph,
}

/// Standalone `<svg>` document for one chart.
pub fn render_svg(scene: &SceneGraph, background: Option<Color>) -> String {
    let mut out = String::new();
    open_document(&mut out, scene.width, scene.height);
    if let Some(bg) = background {
        write_rect(&mut out, 0.0, 0.0, scene.width, scene.height, bg);
    }
    write_group(&mut out, scene, 0.0, 0.0);
    out.push_str("</svg>\n");
    out
}

/// Several charts in one document, each under its title strip.
pub fn render_panels(width: f64, height: f64, theme: &Theme, panels: &[Panel<'_>]) -> String {
    let mut out = String::new();
    open_document(&mut out, width, height);
    write_rect(&mut out, 0.0, 0.0, width, height, theme.background);
    for panel in panels {
        let mut top = panel.y;
        if let Some(title) = panel.title {
            let _ = writeln!(
                out,
                r#"<text x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="13" font-weight="600" fill="{}">{}</text>"#,
                num(panel.x + 8.0),
                num(panel.y + 17.0),
                theme.actual.to_hex_rgb(),
                escape_xml(title)
            );
            top += TITLE_HEIGHT;
        }
        write_group(&mut out, panel.scene, panel.x, top);
    }
    out.push_str("</svg>\n");
    out
}

/// Append the chart as a `<g>` translated so its outer origin lands on `(x, y)`.
pub fn write_group(out: &mut String, scene: &SceneGraph, x: f64, y: f64) {
    let _ = writeln!(
        out,
        r#"<g transform="translate({},{})">"#,
        num(x + scene.margins.left),
        num(y + scene.margins.top)
    );
    for item in &scene.items {
        write_primitive(out, item);
    }
    out.push_str("</g>\n");
}

fn open_document(out: &mut String, width: f64, height: f64) {
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img">"#,
        w = num(width),
        h = num(height)
    );
}

fn write_rect(out: &mut String, x: f64, y: f64, w: f64, h: f64, fill: Color) {
    let _ = writeln!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
        num(x),
        num(y),
        num(w),
        num(h),
        paint("fill", fill)
    );
}

fn write_primitive(out: &mut String, item: &Primitive) {
    let _ = match item {
        Primitive::GridLine(g) => writeln!(
            out,
            r#"<line x1="{}" x2="{}" y1="{y}" y2="{y}"{}/>"#,
            num(g.x1),
            num(g.x2),
            stroke_attrs(&g.stroke),
            y = num(g.y)
        ),
        Primitive::AxisLine(a) => writeln!(
            out,
            r#"<line x1="{}" x2="{}" y1="{}" y2="{}"{}/>"#,
            num(a.from.x),
            num(a.to.x),
            num(a.from.y),
            num(a.to.y),
            stroke_attrs(&a.stroke)
        ),
        Primitive::Label(l) => write_label(out, l),
        Primitive::Band(b) => writeln!(
            out,
            r#"<path d="{}"{} stroke="none"/>"#,
            path_data(&b.outline),
            paint("fill", b.fill)
        ),
        Primitive::Polyline(p) => writeln!(
            out,
            r#"<path d="{}" fill="none"{}/>"#,
            path_data(&p.path),
            stroke_attrs(&p.stroke)
        ),
    };
}

fn write_label(out: &mut String, l: &Label) -> std::fmt::Result {
    let anchor = match l.anchor {
        TextAnchor::Start => "start",
        TextAnchor::End => "end",
    };
    let baseline = match l.baseline {
        TextBaseline::Middle => r#" dominant-baseline="middle""#,
        TextBaseline::Alphabetic => "",
    };
    writeln!(
        out,
        r#"<text x="{}" y="{}" text-anchor="{anchor}"{baseline} font-family="{FONT_FAMILY}" font-size="{}"{}>{}</text>"#,
        num(l.at.x),
        num(l.at.y),
        num(l.size),
        paint("fill", l.color),
        escape_xml(&l.text)
    )
}

fn stroke_attrs(s: &Stroke) -> String {
    let mut attrs = format!(r#"{} stroke-width="{}""#, paint("stroke", s.color), num(s.width));
    if let Some([dash, gap]) = s.dash {
        let _ = write!(attrs, r#" stroke-dasharray="{} {}""#, num(dash), num(gap));
    }
    attrs
}

/// ` fill="#rrggbb"` plus an opacity attribute for translucent colors.
fn paint(attr: &str, c: Color) -> String {
    if c.is_opaque() {
        format!(r#" {attr}="{}""#, c.to_hex_rgb())
    } else {
        format!(r#" {attr}="{}" {attr}-opacity="{}""#, c.to_hex_rgb(), num(c.opacity()))
    }
}

/// Path data with coordinates rounded to two decimals.
pub fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for cmd in path.commands() {
        if !d.is_empty() { d.push(' '); }
        let _ = match cmd {
            PathCommand::MoveTo(p) => write!(d, "M{},{}", num(p.x), num(p.y)),
            PathCommand::LineTo(p) => write!(d, "L{},{}", num(p.x), num(p.y)),
            PathCommand::Close => write!(d, "Z"),
        };
    }
    d
}

/// Two-decimal number without trailing zeros ("12", "12.5", "12.34").
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
