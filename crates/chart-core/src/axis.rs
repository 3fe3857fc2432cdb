// File: crates/chart-core/src/axis.rs
// Summary: Value grid/tick labels and the two endpoint date labels.

use chrono::NaiveDate;

use crate::grid::{format_tick, ticks, DEFAULT_TICK_COUNT};
use crate::scale::LinearScale;
use crate::scene::{AxisLine, GridLine, Label, LabelKind, Primitive, Stroke, TextAnchor, TextBaseline};
use crate::theme::Theme;
use crate::types::Point;

/// Gap between the plot's left edge and the right end of value labels.
const VALUE_LABEL_OFFSET: f64 = 8.0;
/// Distance from the bottom axis to the date label baseline.
const DATE_LABEL_OFFSET: f64 = 18.0;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Axis primitives for one chart, in paint order: grid lines with their
/// value labels, the bottom axis line, then the start/end date labels.
///
/// `dates` is `None` when the chart has no rows; no date labels are emitted then.
pub fn build_axes(
    dates: Option<(NaiveDate, NaiveDate)>,
    y_domain: (f64, f64),
    y_scale: &LinearScale,
    inner: (f64, f64),
    theme: &Theme,
) -> Vec<Primitive> {
    let (inner_w, inner_h) = inner;
    let mut out = Vec::new();

    for value in ticks(y_domain.0, y_domain.1, DEFAULT_TICK_COUNT) {
        let y = y_scale.map(value);
        out.push(Primitive::GridLine(GridLine {
            value,
            y,
            x1: 0.0,
            x2: inner_w,
            stroke: Stroke::solid(theme.grid, 1.0),
        }));
        out.push(Primitive::Label(Label {
            kind: LabelKind::ValueTick,
            text: format_tick(value),
            at: Point::new(-VALUE_LABEL_OFFSET, y),
            anchor: TextAnchor::End,
            baseline: TextBaseline::Middle,
            size: theme.font_size,
            color: theme.label,
        }));
    }

    out.push(Primitive::AxisLine(AxisLine {
        from: Point::new(0.0, inner_h),
        to: Point::new(inner_w, inner_h),
        stroke: Stroke::solid(theme.axis_line, 1.0),
    }));

    if let Some((first, last)) = dates {
        let date_label = |kind, date: NaiveDate, x, anchor| Label {
            kind,
            text: date.format(DATE_FORMAT).to_string(),
            at: Point::new(x, inner_h + DATE_LABEL_OFFSET),
            anchor,
            baseline: TextBaseline::Alphabetic,
            size: theme.font_size,
            color: theme.label,
        };
        out.push(Primitive::Label(date_label(LabelKind::StartDate, first, 0.0, TextAnchor::Start)));
        out.push(Primitive::Label(date_label(LabelKind::EndDate, last, inner_w, TextAnchor::End)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn five_grid_lines_and_two_dates() {
        let ys = LinearScale::new((0.0, 4.0), (80.0, 0.0));
        let items = build_axes(Some((day(1), day(3))), (0.0, 4.0), &ys, (280.0, 80.0), &Theme::light());

        let grid: Vec<f64> = items
            .iter()
            .filter_map(|p| match p { Primitive::GridLine(g) => Some(g.y), _ => None })
            .collect();
        assert_eq!(grid, vec![80.0, 60.0, 40.0, 20.0, 0.0]);

        let dates: Vec<(&str, f64, TextAnchor)> = items
            .iter()
            .filter_map(|p| match p {
                Primitive::Label(l) if l.kind != LabelKind::ValueTick => Some((l.text.as_str(), l.at.x, l.anchor)),
                _ => None,
            })
            .collect();
        assert_eq!(dates, vec![("2025-01-01", 0.0, TextAnchor::Start), ("2025-01-03", 280.0, TextAnchor::End)]);
    }

    #[test]
    fn value_labels_are_rounded() {
        let ys = LinearScale::new((9.88, 12.12), (80.0, 0.0));
        let items = build_axes(None, (9.88, 12.12), &ys, (280.0, 80.0), &Theme::light());
        let texts: Vec<&str> = items
            .iter()
            .filter_map(|p| match p { Primitive::Label(l) => Some(l.text.as_str()), _ => None })
            .collect();
        assert_eq!(texts, vec!["9.9", "10.4", "11", "11.6", "12.1"]);
    }
}
