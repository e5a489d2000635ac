// core/axes.rs
//
// Variable-font axis values and the linear mapping shared by both trackers.
// No dependencies on the DOM — just math and formatting.

use std::fmt;

/// Map `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, then clamp to the output range.
///
/// The output range may be given in either order; the clamp always uses
/// the smaller bound as the minimum. A result that degenerates to NaN
/// (overflowing or empty ranges) falls back to `out_lo`.
#[inline]
pub fn remap_clamped(value: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let t = (value - in_lo) / (in_hi - in_lo);
    let mapped = out_lo + (out_hi - out_lo) * t;
    if mapped.is_nan() {
        return out_lo;
    }
    mapped.clamp(out_lo.min(out_hi), out_lo.max(out_hi))
}

/// A snapshot of the three axes applied to one glyph.
///
/// Taken once per insertion pass, so every glyph of a batch shares it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisValues {
    /// `wght` axis.
    pub weight: f64,
    /// `wdth` axis.
    pub width: f64,
    /// `ital` axis.
    pub italic: f64,
}

impl AxisValues {
    pub fn new(weight: f64, width: f64, italic: f64) -> Self {
        Self { weight, width, italic }
    }

    /// CSS `font-variation-settings` value, e.g. `'wght' 90, 'wdth' 50, 'ital' 30`.
    pub fn font_variation_settings(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AxisValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'wght' {}, 'wdth' {}, 'ital' {}",
            self.weight, self.width, self.italic
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_endpoints_and_midpoint() {
        assert_eq!(remap_clamped(-90.0, -90.0, 90.0, 0.0, 100.0), 0.0);
        assert_eq!(remap_clamped(0.0, -90.0, 90.0, 0.0, 100.0), 50.0);
        assert_eq!(remap_clamped(90.0, -90.0, 90.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn remap_clamps_out_of_domain() {
        assert_eq!(remap_clamped(500.0, 0.0, 10.0, 10.0, 190.0), 190.0);
        assert_eq!(remap_clamped(-500.0, 0.0, 10.0, 10.0, 190.0), 10.0);
    }

    #[test]
    fn remap_handles_descending_output() {
        assert_eq!(remap_clamped(2.0, 0.0, 10.0, 100.0, 0.0), 80.0);
        assert_eq!(remap_clamped(20.0, 0.0, 10.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn remap_overflowing_range_never_yields_nan() {
        // out_hi - out_lo overflows to infinity; infinity * 0 is NaN.
        assert_eq!(remap_clamped(-90.0, -90.0, 90.0, -1e308, 1e308), -1e308);
        assert_eq!(remap_clamped(5.0, 5.0, 5.0, 10.0, 190.0), 10.0);
    }

    #[test]
    fn settings_string_uses_shortest_numbers() {
        let axes = AxisValues::new(90.0, 50.0, 30.0);
        assert_eq!(axes.font_variation_settings(), "'wght' 90, 'wdth' 50, 'ital' 30");

        let axes = AxisValues::new(90.0, 112.5, 37.5);
        assert_eq!(axes.font_variation_settings(), "'wght' 90, 'wdth' 112.5, 'ital' 37.5");
    }
}
