//! Color values and color space conversion

mod contrast;
mod convert;

use std::fmt;

use thiserror::Error;

pub(crate) use contrast::contrast_color;
pub(crate) use convert::{hex_to_hsb, hsb_to_hex, hsb_to_rgb, rgb_to_cmyk};

/// Malformed hex color input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{input}': {reason}")]
pub(crate) struct FormatError {
    pub(crate) input: String,
    pub(crate) reason: &'static str,
}

impl FormatError {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub(crate) const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`
    pub(crate) fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue (degrees), saturation and brightness (percent).
///
/// Saturation and brightness are not clamped here: supporting ramps are
/// seeded from offsets that may fall below zero, and only the shade
/// generator brings them back into range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsb {
    pub(crate) h: f64,
    pub(crate) s: f64,
    pub(crate) b: f64,
}

impl Hsb {
    pub(crate) fn new(h: f64, s: f64, b: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s,
            b,
        }
    }

    /// Every component rounded half-to-even, hue wrapped back into [0, 360)
    pub(crate) fn rounded(self) -> Self {
        Self::new(
            round_half_even(self.h),
            round_half_even(self.s),
            round_half_even(self.b),
        )
    }

    /// Integer components, for display and serialization
    pub(crate) fn components(self) -> [i32; 3] {
        [
            round_half_even(self.h) as i32,
            round_half_even(self.s) as i32,
            round_half_even(self.b) as i32,
        ]
    }
}

impl fmt::Display for Hsb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [h, s, b] = self.components();
        write!(f, "({}, {}, {})", h, s, b)
    }
}

/// Subtractive color in whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cmyk {
    pub(crate) c: u8,
    pub(crate) m: u8,
    pub(crate) y: u8,
    pub(crate) k: u8,
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.c, self.m, self.y, self.k)
    }
}

/// Round to the nearest integer, ties to even.
///
/// Shade offsets of 12.5/17.5/37.5/52.5 land exactly on ties for integer
/// bases, so the tie rule decides the published values.
pub(crate) fn round_half_even(value: f64) -> f64 {
    let rounded = value.round_ties_even();
    // Normalize -0.0
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests;
