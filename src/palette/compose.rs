//! Palette composition from seed colors

use log::debug;

use crate::color::{FormatError, Hsb, hex_to_hsb};

use super::{Palette, Ramp, Role, generate_shades};

const NEUTRAL_SATURATION: f64 = 15.0;
const NEUTRAL_BRIGHTNESS: f64 = 70.0;

/// Fixed hues of the supporting ramps, in palette order
const SUPPORTING_HUES: [(Role, f64); 4] = [
    (Role::Green, 134.0),
    (Role::Orange, 23.0),
    (Role::Red, 0.0),
    (Role::Blue, 204.0),
];

/// Supporting ramps sit slightly below the primary's saturation and brightness
const SUPPORTING_SATURATION_OFFSET: f64 = -10.0;
const SUPPORTING_BRIGHTNESS_OFFSET: f64 = -2.0;

fn seed_hsb(hex: &str) -> Result<Hsb, FormatError> {
    Ok(hex_to_hsb(hex)?.rounded())
}

/// Build the full palette from one to three hex seeds.
///
/// Only malformed seeds fail; the error is the converter's, unchanged.
pub(crate) fn compose(
    primary: &str,
    secondary: Option<&str>,
    tertiary: Option<&str>,
) -> Result<Palette, FormatError> {
    let primary = seed_hsb(primary)?;
    let secondary = secondary.map(seed_hsb).transpose()?;
    let tertiary = tertiary.map(seed_hsb).transpose()?;

    debug!(
        "composing palette: primary {} secondary {:?} tertiary {:?}",
        primary, secondary, tertiary
    );

    let mut ramps = Vec::with_capacity(Role::ALL.len());
    ramps.push(Ramp::new(Role::Primary, generate_shades(primary)));
    if let Some(hsb) = secondary {
        ramps.push(Ramp::new(Role::Secondary, generate_shades(hsb)));
    }
    if let Some(hsb) = tertiary {
        ramps.push(Ramp::new(Role::Tertiary, generate_shades(hsb)));
    }

    let neutral = Hsb::new(primary.h, NEUTRAL_SATURATION, NEUTRAL_BRIGHTNESS);
    ramps.push(Ramp::new(Role::Neutral, generate_shades(neutral)));

    // Not clamped: dark or gray primaries go negative here and rely on the
    // per-shade clamp.
    let saturation = primary.s + SUPPORTING_SATURATION_OFFSET;
    let brightness = primary.b + SUPPORTING_BRIGHTNESS_OFFSET;
    for (role, hue) in SUPPORTING_HUES {
        let base = Hsb::new(hue, saturation, brightness);
        ramps.push(Ramp::new(role, generate_shades(base)));
    }

    Ok(Palette { ramps })
}
