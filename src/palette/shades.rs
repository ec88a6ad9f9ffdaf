//! Shade ramp derivation from a single base color

use crate::color::{Hsb, round_half_even};

use super::{Shade, ShadeKey};

/// (saturation delta, brightness delta) per key, relative to the base at 500
const SHADE_STEPS: [(ShadeKey, f64, f64); 9] = [
    (ShadeKey::ALL[0], -40.0, 50.0),
    (ShadeKey::ALL[1], -30.0, 37.5),
    (ShadeKey::ALL[2], -20.0, 25.0),
    (ShadeKey::ALL[3], -10.0, 12.5),
    (ShadeKey::ALL[4], 0.0, 0.0),
    (ShadeKey::ALL[5], 10.0, -17.5),
    (ShadeKey::ALL[6], 20.0, -35.0),
    (ShadeKey::ALL[7], 30.0, -52.5),
    (ShadeKey::ALL[8], 40.0, -70.0),
];

fn adjust(value: f64, delta: f64) -> f64 {
    round_half_even((value + delta).clamp(0.0, 100.0))
}

/// Derive the nine shades of `base`, which becomes shade 500.
///
/// Hue is held. Saturation and brightness are offset, clamped to [0, 100]
/// and rounded at every key, including 500.
pub(crate) fn generate_shades(base: Hsb) -> [Shade; 9] {
    SHADE_STEPS.map(|(key, saturation, brightness)| Shade {
        key,
        hsb: Hsb::new(
            base.h,
            adjust(base.s, saturation),
            adjust(base.b, brightness),
        ),
    })
}
