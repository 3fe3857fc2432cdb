// File: crates/chart-core/src/block.rs
// Summary: Embeddable chart blocks configured by plain options, and the standard panel layouts.

use serde::{Deserialize, Serialize};

use crate::chart::Composer;
use crate::error::Result;
use crate::scene::SceneGraph;
use crate::series::{Row, SeriesDescriptor};
use crate::svg::{render_panels, Panel, TITLE_HEIGHT};
use crate::theme::Color;
use crate::types::{Dimensions, Margins, HEIGHT, WIDTH};

/// Gap between neighbouring panels, in pixels.
pub const PANEL_GAP: f64 = 16.0;
/// Width of the series selector column in the dashboard layout.
pub const SELECTOR_WIDTH: f64 = 260.0;

fn default_width() -> f64 { WIDTH }
fn default_height() -> f64 { HEIGHT }

/// One chart as a host would configure it: a title, a size and the series to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartBlock {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub margin: Margins,
    pub series: Vec<SeriesDescriptor>,
}

impl ChartBlock {
    pub fn new(title: impl Into<String>, series: Vec<SeriesDescriptor>) -> Self {
        Self {
            title: title.into(),
            width: WIDTH,
            height: HEIGHT,
            margin: Margins::default(),
            series,
        }
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: Margins) -> Self {
        self.margin = margin;
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    pub fn compose(&self, rows: &[Row], composer: &Composer) -> Result<SceneGraph> {
        composer.compose(rows, &self.series, self.dimensions(), self.margin)
    }
}

/// A block positioned inside a larger layout (top-left of its title strip).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub block: ChartBlock,
}

/// Blocks plus their overall canvas size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub placements: Vec<Placement>,
}

impl Layout {
    /// Compose every block, then emit one SVG document with all panels.
    pub fn render_svg(&self, rows: &[Row], composer: &Composer) -> Result<String> {
        let scenes = self
            .placements
            .iter()
            .map(|p| p.block.compose(rows, composer))
            .collect::<Result<Vec<_>>>()?;
        let panels: Vec<Panel<'_>> = self
            .placements
            .iter()
            .zip(&scenes)
            .map(|(p, scene)| Panel {
                title: Some(p.block.title.as_str()).filter(|t| !t.is_empty()),
                x: p.x,
                y: p.y,
                scene,
            })
            .collect();
        Ok(render_panels(self.width, self.height, &composer.theme, &panels))
    }
}

const CLASSICAL_SLATE: Color = Color::rgb(0x1f, 0x29, 0x37);
const CLASSICAL_TITLE: &str = "Classical Forecast (Actual vs ARIMA_M)";
const GOLD_TITLE: &str = "Targeted Seasonal Forecast (Gold Line)";
const ZONE_TITLE: &str = "Targeted Seasonal Forecast (Gold Line & Green Zone)";

/// Actual against the classical ARIMA_M forecast, dashed.
pub fn classical_series() -> Vec<SeriesDescriptor> {
    vec![
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("ARIMA_M").with_dashed(true),
    ]
}

/// Actual against the targeted seasonal forecast (gold line).
pub fn seasonal_series() -> Vec<SeriesDescriptor> {
    vec![SeriesDescriptor::actual("actual"), SeriesDescriptor::forecast("TSF")]
}

/// Seasonal forecast with its LOW/HIGH confidence zone.
pub fn seasonal_zone_series() -> Vec<SeriesDescriptor> {
    vec![
        SeriesDescriptor::band("LOW", "HIGH"),
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("TSF"),
    ]
}

/// Three equal columns side by side.
pub fn three_up(width: f64, height: f64, margin: Margins) -> Layout {
    let col_w = ((width - PANEL_GAP * 2.0) / 3.0).floor();
    // slate forecast next to the default actual color
    let classical = vec![
        SeriesDescriptor::actual("actual"),
        SeriesDescriptor::forecast("ARIMA_M").with_dashed(true).with_color(CLASSICAL_SLATE),
    ];
    let blocks = [
        ChartBlock::new(CLASSICAL_TITLE, classical),
        ChartBlock::new(GOLD_TITLE, seasonal_series()),
        ChartBlock::new(ZONE_TITLE, seasonal_zone_series()),
    ];
    let placements = blocks
        .into_iter()
        .enumerate()
        .map(|(i, b)| Placement {
            x: i as f64 * (col_w + PANEL_GAP),
            y: 0.0,
            block: b.sized(col_w, height).with_margin(margin),
        })
        .collect();
    Layout { width, height: height + TITLE_HEIGHT, placements }
}

/// Selector column, three small charts on top, one wide chart below.
pub fn dashboard(width: f64, top_height: f64, bottom_height: f64) -> Layout {
    let right_w = width - SELECTOR_WIDTH - PANEL_GAP;
    let small_w = ((right_w - PANEL_GAP * 2.0) / 3.0).floor();
    let margin = Margins::new(18.0, 20.0, 26.0, 36.0);
    let top = [
        ChartBlock::new(CLASSICAL_TITLE, classical_series()),
        ChartBlock::new(GOLD_TITLE, seasonal_series()),
        ChartBlock::new(ZONE_TITLE, seasonal_zone_series()),
    ];
    let mut placements: Vec<Placement> = top
        .into_iter()
        .enumerate()
        .map(|(i, b)| Placement {
            x: SELECTOR_WIDTH + PANEL_GAP + i as f64 * (small_w + PANEL_GAP),
            y: 0.0,
            block: b.sized(small_w, top_height).with_margin(margin),
        })
        .collect();
    let bottom_y = top_height + TITLE_HEIGHT + PANEL_GAP;
    placements.push(Placement {
        x: 0.0,
        y: bottom_y,
        block: ChartBlock::new("Targeted Seasonal Forecast View", seasonal_zone_series())
            .sized(width, bottom_height)
            .with_margin(margin),
    });
    Layout {
        width,
        height: bottom_y + bottom_height + TITLE_HEIGHT,
        placements,
    }
}

/// Blocks one under another at their own sizes; the canvas is as wide as the widest.
pub fn stacked(blocks: Vec<ChartBlock>) -> Layout {
    let width = blocks.iter().map(|b| b.width).fold(0.0, f64::max);
    let mut y = 0.0;
    let mut placements = Vec::with_capacity(blocks.len());
    for block in blocks {
        let h = block.height + TITLE_HEIGHT;
        placements.push(Placement { x: 0.0, y, block });
        y += h + PANEL_GAP;
    }
    let height = (y - PANEL_GAP).max(0.0);
    Layout { width, height, placements }
}

/// Default composer for a named theme.
pub fn composer_for(theme: &str) -> Composer {
    Composer::new(crate::theme::find(theme))
}

impl Default for Layout {
    fn default() -> Self {
        three_up(WIDTH, HEIGHT, Margins::default())
    }
}
