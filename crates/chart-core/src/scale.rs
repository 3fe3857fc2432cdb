// File: crates/chart-core/src/scale.rs
// Summary: Padded domain extents and linear domain-to-pixel scales.

use serde::Serialize;

/// Fraction of the data span added on each side of the extent.
pub const EXTENT_PADDING: f64 = 0.06;
/// Domain used when there is nothing to measure.
pub const DEFAULT_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Padded `(lo, hi)` over the finite values in `values`.
///
/// Missing and non-finite entries are skipped. With no valid values the
/// result is [`DEFAULT_DOMAIN`]; when every valid value is equal to `v` the
/// result is `(v - 1, v + 1)`. Otherwise the span is widened by
/// [`EXTENT_PADDING`] on both sides.
pub fn extent<I>(values: I) -> (f64, f64)
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values.into_iter().flatten().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return DEFAULT_DOMAIN;
    }
    if lo == hi {
        return (lo - 1.0, hi + 1.0);
    }
    // scaled before subtracting: the span of two finite values can overflow
    let pad = hi * EXTENT_PADDING - lo * EXTENT_PADDING;
    ((lo - pad).max(f64::MIN), (hi + pad).min(f64::MAX))
}

/// Affine map from a data domain `[d0, d1]` to a pixel range `[r0, r1]`.
/// An inverted range (`r0 > r1`) flips the axis, as used for screen Y.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Position of `x` along the range. A zero-width domain divides by 1, so
    /// every input maps near `r0` instead of producing NaN.
    ///
    /// Works on half-values so domains wider than `f64::MAX` stay finite.
    #[inline]
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let half_span = d1 * 0.5 - d0 * 0.5;
        let half_span = if half_span == 0.0 { 0.5 } else { half_span };
        r0 + (x * 0.5 - d0 * 0.5) / half_span * (r1 - r0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn extent_pads_six_percent() {
        assert!(close(extent([Some(1.0), Some(2.0), Some(3.0)]), (0.88, 3.12)));
    }

    #[test]
    fn extent_degenerate_cases() {
        assert_eq!(extent([Some(5.0), Some(5.0), Some(5.0)]), (4.0, 6.0));
        assert_eq!(extent(Vec::<Option<f64>>::new()), (0.0, 1.0));
        assert_eq!(extent([None, Some(f64::NAN), None]), (0.0, 1.0));
    }

    #[test]
    fn extent_ignores_missing_and_nan() {
        let e = extent([None, Some(10.0), Some(f64::NAN), Some(20.0), Some(f64::INFINITY)]);
        assert!(close(e, (9.4, 20.6)));
    }

    #[test]
    fn extent_of_huge_values_stays_finite() {
        let (lo, hi) = extent([Some(-1e308), Some(1e308)]);
        assert!(lo.is_finite() && hi.is_finite());
        assert!(lo < -1e308 && hi > 1e308);

        let s = LinearScale::new((lo, hi), (80.0, 0.0));
        for v in [-1e308, 0.0, 1e308] {
            let y = s.map(v);
            assert!(y.is_finite() && (0.0..=80.0).contains(&y), "{v} -> {y}");
        }
        assert!((s.map(0.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn scale_maps_affinely() {
        let s = LinearScale::new((10.0, 20.0), (0.0, 100.0));
        assert_eq!(s.map(10.0), 0.0);
        assert_eq!(s.map(15.0), 50.0);
        assert_eq!(s.map(20.0), 100.0);
    }

    #[test]
    fn inverted_range_flips_axis() {
        let s = LinearScale::new((0.0, 4.0), (80.0, 0.0));
        assert_eq!(s.map(0.0), 80.0);
        assert_eq!(s.map(4.0), 0.0);
        assert_eq!(s.map(1.0), 60.0);
    }

    #[test]
    fn single_point_domain_maps_to_range_start() {
        let s = LinearScale::new((7.0, 7.0), (0.0, 280.0));
        assert_eq!(s.map(7.0), 0.0);
        assert!(s.map(8.0).is_finite());
    }
}
