/// Hides one bit in the sign of a frequency coefficient.
///
/// A `1` makes the coefficient positive, a `0` negative. The magnitude is kept when it is
/// already at least `step`, otherwise it is raised to exactly `step` so that pixel rounding
/// cannot flip the sign afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientEncoder {
    step: f64,
}

impl CoefficientEncoder {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    pub fn write_bit(&self, coefficient: f64, bit: bool) -> f64 {
        let magnitude = coefficient.abs().max(self.step);
        if bit {
            magnitude
        } else {
            -magnitude
        }
    }

    /// zero reads as `0`
    pub fn read_bit(&self, coefficient: f64) -> bool {
        coefficient > 0.0
    }
}
