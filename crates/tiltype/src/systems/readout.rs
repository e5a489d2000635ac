use std::fmt;

/// Debug readout shown after every accepted orientation reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    /// Raw tilt angle in degrees.
    pub gamma: f64,
    pub italic: f64,
    pub width: f64,
}

/// Format `value` with one decimal, rounding exact halves away from zero
/// (`Number.prototype.toFixed(1)` behaviour).
///
/// `{:.1}` already rounds on the exact binary value; it only differs on
/// exact ties, where it rounds to even.
pub fn fixed1(value: f64) -> String {
    let magnitude = value.abs();
    let scaled = magnitude * 10.0;
    // mul_add is exact, so a zero residual means `scaled` is the true product.
    let exact_tie = scaled.fract() == 0.5 && magnitude.mul_add(10.0, -scaled) == 0.0;
    let digits = if exact_tie {
        format!("{:.1}", scaled.ceil() / 10.0)
    } else {
        format!("{magnitude:.1}")
    };
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gamma: {}° | italic: {} | width: {}",
            fixed1(self.gamma),
            fixed1(self.italic),
            fixed1(self.width)
        )
    }
}
