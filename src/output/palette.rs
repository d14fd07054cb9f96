// Colors for the two figures.
//
// Bars use a sequential orange scale (the 9-class ColorBrewer "Oranges"
// ramp, linearly interpolated) normalized over the displayed counts. The
// heatmap uses exactly two discrete colors.

use plotters::style::RGBColor;

/// Heatmap cell color for a noun the list does not contain.
pub const ABSENT: RGBColor = RGBColor(0xfc, 0xa6, 0x63);
/// Heatmap cell color for a noun the list shares.
pub const PRESENT: RGBColor = RGBColor(0xde, 0x5b, 0x12);

const ORANGES: [(u8, u8, u8); 9] = [
    (0xff, 0xf5, 0xeb),
    (0xfe, 0xe6, 0xce),
    (0xfd, 0xd0, 0xa2),
    (0xfd, 0xae, 0x6b),
    (0xfd, 0x8d, 0x3c),
    (0xf1, 0x69, 0x13),
    (0xd9, 0x48, 0x01),
    (0xa6, 0x36, 0x03),
    (0x7f, 0x27, 0x04),
];

/// Sample the orange ramp at `t` in [0, 1]; values outside are clamped.
pub fn oranges(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (ORANGES.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(ORANGES.len() - 1);
    let frac = scaled - lo as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (ORANGES[lo], ORANGES[hi]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Linear normalization of values onto the orange ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    min: f64,
    max: f64,
}

impl ColorScale {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Scale spanning the smallest and largest count. An empty slice gives a
    /// zero-width scale.
    pub fn over(counts: &[usize]) -> Self {
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        Self::new(min as f64, max as f64)
    }

    /// Position of `value` on the scale, in [0, 1].
    ///
    /// A zero-width scale (all values equal) maps everything to the midpoint.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    pub fn color(&self, value: f64) -> RGBColor {
        oranges(self.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints() {
        assert_eq!(oranges(0.0), RGBColor(0xff, 0xf5, 0xeb));
        assert_eq!(oranges(1.0), RGBColor(0x7f, 0x27, 0x04));
        assert_eq!(oranges(-3.0), oranges(0.0));
        assert_eq!(oranges(7.0), oranges(1.0));
    }

    #[test]
    fn ramp_hits_stops_exactly() {
        // t = 0.5 lands on the fifth stop
        assert_eq!(oranges(0.5), RGBColor(0xfd, 0x8d, 0x3c));
    }

    #[test]
    fn normalize_is_linear() {
        let scale = ColorScale::over(&[10, 30, 20]);
        assert_eq!(scale.normalize(10.0), 0.0);
        assert_eq!(scale.normalize(30.0), 1.0);
        assert!((scale.normalize(20.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_width_scale_does_not_divide() {
        let scale = ColorScale::over(&[7, 7, 7]);
        assert_eq!(scale.normalize(7.0), 0.5);
        assert_eq!(scale.color(7.0), oranges(0.5));
    }

    #[test]
    fn empty_scale_is_zero_width() {
        let scale = ColorScale::over(&[]);
        assert_eq!(scale.normalize(0.0), 0.5);
    }
}
