// File: crates/chart-core/src/grid.rs
// Summary: Tick layout for horizontal grid lines and value labels.

/// Number of intervals between value ticks on the vertical axis.
pub const DEFAULT_TICK_COUNT: usize = 4;

/// `count + 1` evenly spaced values from `lo` to `hi`, both inclusive.
pub fn ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count == 0 { return vec![lo]; }
    let step = (hi - lo) / count as f64;
    (0..=count).map(|i| lo + step * i as f64).collect()
}

/// Render a tick value rounded to one decimal place ("10", "10.5").
/// Halves round toward positive infinity.
pub fn format_tick(v: f64) -> String {
    let mut r = (v * 10.0 + 0.5).floor() / 10.0;
    if r == 0.0 { r = 0.0; } // fold -0
    format!("{r}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_inclusive_and_even() {
        assert_eq!(ticks(0.0, 8.0, 4), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(ticks(3.0, 3.0, 2), vec![3.0, 3.0, 3.0]);
        assert_eq!(ticks(1.0, 2.0, 0), vec![1.0]);
    }

    #[test]
    fn tick_labels_round_to_one_decimal() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(9.88), "9.9");
        assert_eq!(format_tick(12.12), "12.1");
        assert_eq!(format_tick(-0.04), "0");
        assert_eq!(format_tick(-1.25), "-1.2");
    }
}
