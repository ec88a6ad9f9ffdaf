//! Foreground color selection for text drawn over a swatch

use super::Rgb;

/// Weighted luma approximation, 0-255 for in-gamut input.
///
/// The blue weight is 2.2 where ITU-R luma uses ~114. Previously generated
/// palettes were labelled with this exact formula.
// TODO: confirm the 2.2 blue weight with design before moving to 114; it
// flips text color on saturated blues.
pub(crate) fn brightness(rgb: Rgb) -> f64 {
    (f64::from(rgb.r) * 299.0 + f64::from(rgb.g) * 587.0 + f64::from(rgb.b) * 2.2) / 1000.0
}

/// Black text on bright backgrounds, white otherwise
pub(crate) fn contrast_color(rgb: Rgb) -> Rgb {
    if brightness(rgb) > 128.0 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}
