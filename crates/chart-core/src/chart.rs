// File: crates/chart-core/src/chart.rs
// Summary: Composer that turns rows + series descriptors into a scene graph.

use tracing::{debug, trace};

use crate::axis::build_axes;
use crate::error::Result;
use crate::path::{trace_band, trace_polyline, Path, Sample};
use crate::scale::{extent, LinearScale};
use crate::scene::{BandShape, Polyline, Primitive, SceneGraph, Stroke};
use crate::series::{BandSeries, LineSeries, Row, SeriesDescriptor, SeriesRole};
use crate::theme::Theme;
use crate::types::{inner_size, Dimensions, Margins};

/// Compose with the default (light) theme.
pub fn compose(
    rows: &[Row],
    series: &[SeriesDescriptor],
    dims: Dimensions,
    margins: Margins,
) -> Result<SceneGraph> {
    Composer::default().compose(rows, series, dims, margins)
}

/// Stateless chart composer; the theme only supplies default styling.
#[derive(Clone, Debug, Default)]
pub struct Composer {
    pub theme: Theme,
}

impl Composer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn compose(
        &self,
        rows: &[Row],
        series: &[SeriesDescriptor],
        dims: Dimensions,
        margins: Margins,
    ) -> Result<SceneGraph> {
        for (i, s) in series.iter().enumerate() {
            s.validate(i)?;
        }
        let (inner_w, inner_h) = inner_size(dims, margins)?;

        // stable: rows sharing a date keep their input order
        let mut data: Vec<&Row> = rows.iter().collect();
        data.sort_by_key(|r| r.date);

        let dates = data.first().zip(data.last()).map(|(a, b)| (a.date, b.date));
        let x_domain = data
            .first()
            .zip(data.last())
            .map(|(a, b)| (a.day(), b.day()))
            .unwrap_or((0.0, 1.0));
        let x_scale = LinearScale::new(x_domain, (0.0, inner_w));
        let xs: Vec<f64> = data.iter().map(|r| x_scale.map(r.day())).collect();

        // one pooled extent so every series shares the vertical scale
        let keys: Vec<&str> = series.iter().flat_map(|s| s.keys()).collect();
        let y_domain = extent(data.iter().flat_map(|r| keys.iter().map(move |k| r.get(k))));
        let y_scale = LinearScale::new(y_domain, (inner_h, 0.0));

        debug!(
            rows = data.len(),
            series = series.len(),
            y_lo = y_domain.0,
            y_hi = y_domain.1,
            "composing chart"
        );

        let project = |key: &str| -> Vec<Sample> {
            data.iter()
                .zip(&xs)
                .map(|(r, &x)| (x, r.get(key).map(|v| y_scale.map(v))))
                .collect()
        };

        let mut items = build_axes(dates, y_domain, &y_scale, (inner_w, inner_h), &self.theme);

        for band in series.iter().filter_map(|s| match s {
            SeriesDescriptor::Band(b) => Some(b),
            SeriesDescriptor::Line(_) => None,
        }) {
            match trace_band(&project(&band.high_key), &project(&band.low_key)) {
                Some(outline) => items.push(Primitive::Band(self.band_shape(band, outline))),
                None => trace!(low = %band.low_key, high = %band.high_key, "band omitted: fewer than 2 paired points"),
            }
        }

        for line in series.iter().filter_map(|s| match s {
            SeriesDescriptor::Line(l) => Some(l),
            SeriesDescriptor::Band(_) => None,
        }) {
            let path = trace_polyline(&project(&line.key));
            if path.point_count() < 2 {
                trace!(key = %line.key, "line omitted: fewer than 2 valid points");
                continue;
            }
            items.push(Primitive::Polyline(Polyline {
                key: line.key.clone(),
                path,
                stroke: self.line_stroke(line),
            }));
        }

        Ok(SceneGraph {
            width: dims.width,
            height: dims.height,
            margins,
            inner_width: inner_w,
            inner_height: inner_h,
            x_scale,
            y_scale,
            items,
        })
    }

    /// Role defaults, then explicit descriptor overrides.
    pub fn line_stroke(&self, line: &LineSeries) -> Stroke {
        let t = &self.theme;
        let (color, width, dashed) = match line.role {
            SeriesRole::Actual => (t.actual, t.actual_width, false),
            SeriesRole::Forecast => (t.forecast, t.line_width, t.forecast_dashed),
            SeriesRole::Other => (t.other, t.line_width, false),
        };
        let dashed = line.dashed.unwrap_or(dashed);
        Stroke {
            color: line.color.unwrap_or(color),
            width,
            dash: dashed.then_some(t.dash),
        }
    }

    fn band_shape(&self, band: &BandSeries, outline: Path) -> BandShape {
        BandShape {
            low_key: band.low_key.clone(),
            high_key: band.high_key.clone(),
            outline,
            fill: band.color.unwrap_or(self.theme.band_fill),
        }
    }
}
