// File: crates/chart-core/src/scene.rs
// Summary: Scene graph produced by the composer; plain data for presentation layers.

use serde::Serialize;

use crate::path::Path;
use crate::scale::LinearScale;
use crate::theme::Color;
use crate::types::{Margins, Point};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    /// Dash and gap lengths; `None` draws a solid stroke.
    pub dash: Option<[f64; 2]>,
}

impl Stroke {
    pub const fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    End,
}

/// Vertical alignment of a label relative to its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Alphabetic,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    ValueTick,
    StartDate,
    EndDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub kind: LabelKind,
    pub text: String,
    pub at: Point,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    pub size: f64,
    pub color: Color,
}

/// Horizontal line spanning the plotting width at value `value`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub stroke: Stroke,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisLine {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BandShape {
    pub low_key: String,
    pub high_key: String,
    pub outline: Path,
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Polyline {
    pub key: String,
    pub path: Path,
    pub stroke: Stroke,
}

/// One drawable item; the scene lists them in paint order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    GridLine(GridLine),
    AxisLine(AxisLine),
    Label(Label),
    Band(BandShape),
    Polyline(Polyline),
}

/// Everything needed to draw one chart, independent of drawing technology.
///
/// Coordinates of every primitive are in the inner plotting frame, whose
/// origin sits at `(margins.left, margins.top)` of the outer surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneGraph {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
    /// Day number (see `Row::day`) to inner x.
    pub x_scale: LinearScale,
    /// Value to inner y (inverted: low values at the bottom).
    pub y_scale: LinearScale,
    pub items: Vec<Primitive>,
}

impl SceneGraph {
    pub fn grid_lines(&self) -> impl Iterator<Item = &GridLine> {
        self.items.iter().filter_map(|p| match p {
            Primitive::GridLine(g) => Some(g),
            _ => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Label(l) => Some(l),
            _ => None,
        })
    }

    pub fn bands(&self) -> impl Iterator<Item = &BandShape> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Band(b) => Some(b),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.items.iter().filter_map(|p| match p {
            Primitive::Polyline(l) => Some(l),
            _ => None,
        })
    }

    /// Outer-surface position of an inner-frame point.
    pub fn to_outer(&self, p: Point) -> Point {
        Point::new(p.x + self.margins.left, p.y + self.margins.top)
    }
}
