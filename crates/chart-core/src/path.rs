// File: crates/chart-core/src/path.rs
// Summary: Gap-aware polyline tracing and closed band outlines.

use std::fmt::Write as _;

use serde::Serialize;

use crate::types::Point;

/// One x position with an optional y. `None` (or a non-finite y) is a gap.
pub type Sample = (f64, Option<f64>);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Drawing-technology-neutral path: a list of move/line/close commands.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of vertices (move and line commands).
    pub fn point_count(&self) -> usize {
        self.commands.iter().filter(|c| !matches!(c, PathCommand::Close)).count()
    }

    /// Vertices grouped by subpath; each `MoveTo` starts a new group.
    pub fn subpaths(&self) -> Vec<Vec<Point>> {
        let mut out: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => out.push(vec![p]),
                PathCommand::LineTo(p) => match out.last_mut() {
                    Some(sub) => sub.push(p),
                    None => out.push(vec![p]),
                },
                PathCommand::Close => {}
            }
        }
        out
    }

    /// SVG path data, e.g. `M0,80 L140,0 L280,40`.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            if !d.is_empty() { d.push(' '); }
            // writing into a String cannot fail
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{},{}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{},{}", p.x, p.y),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

#[inline]
fn present(y: Option<f64>) -> Option<f64> {
    y.filter(|v| v.is_finite())
}

/// Trace samples in order, lifting the pen at every gap: the first valid
/// point after a gap starts a new subpath, consecutive valid points are joined.
pub fn trace_polyline(points: &[Sample]) -> Path {
    let mut path = Path::new();
    let mut pen_down = false;
    for &(x, y) in points {
        let Some(y) = present(y) else {
            pen_down = false;
            continue;
        };
        if pen_down {
            path.line_to(Point::new(x, y));
        } else {
            path.move_to(Point::new(x, y));
            pen_down = true;
        }
    }
    path
}

/// Closed outline between two boundaries sampled at the same indices.
///
/// Only indices where both bounds are present contribute. The outline runs
/// forward along `top`, back along `bottom`, then closes. Returns `None` when
/// fewer than two paired points remain.
pub fn trace_band(top: &[Sample], bottom: &[Sample]) -> Option<Path> {
    let paired: Vec<(Point, Point)> = top
        .iter()
        .zip(bottom)
        .filter_map(|(&(x, hi), &(bx, lo))| {
            Some((Point::new(x, present(hi)?), Point::new(bx, present(lo)?)))
        })
        .collect();
    if paired.len() < 2 {
        return None;
    }

    let mut path = Path::new();
    let mut upper = paired.iter().map(|(t, _)| *t);
    if let Some(first) = upper.next() {
        path.move_to(first);
    }
    for p in upper {
        path.line_to(p);
    }
    for (_, b) in paired.iter().rev() {
        path.line_to(*b);
    }
    path.close();
    Some(path)
}
