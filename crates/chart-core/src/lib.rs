// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the charting engine (scales, paths, axes, composer) and SVG output.

pub mod axis;
pub mod block;
pub mod chart;
pub mod error;
pub mod grid;
pub mod path;
pub mod scale;
pub mod scene;
pub mod series;
pub mod source;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::build_axes;
pub use block::{ChartBlock, Layout, Placement};
pub use chart::{compose, Composer};
pub use error::{ChartError, Result};
pub use grid::{format_tick, ticks};
pub use path::{trace_band, trace_polyline, Path, PathCommand, Sample};
pub use scale::{extent, LinearScale};
pub use scene::{Primitive, SceneGraph, Stroke};
pub use series::{Row, SeriesDescriptor, SeriesRole};
pub use source::{RowSource, ViewQuery};
pub use theme::{Color, Theme};
pub use types::{Dimensions, Margins, Point};
