//! Conversions between hex, RGB, HSB and CMYK

use log::trace;

use super::{Cmyk, FormatError, Hsb, Rgb, round_half_even};

/// Parse `#rrggbb` or `rrggbb` (case insensitive)
pub(crate) fn hex_to_rgb(hex: &str) -> Result<Rgb, FormatError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 {
        return Err(FormatError::new(hex, "expected 6 hex digits"));
    }
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(FormatError::new(hex, "contains non-hex characters"));
    }

    let channel = |start: usize| {
        u8::from_str_radix(&digits[start..start + 2], 16)
            .map_err(|_| FormatError::new(hex, "contains non-hex characters"))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Hexcone RGB to HSB, scaled to (0-360, 0-100, 0-100). No rounding.
pub(crate) fn rgb_to_hsb(rgb: Rgb) -> Hsb {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return Hsb::new(0.0, 0.0, max * 100.0);
    }

    let range = max - min;
    let saturation = range / max;

    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let hue = (sector / 6.0).rem_euclid(1.0);

    Hsb::new(hue * 360.0, saturation * 100.0, max * 100.0)
}

/// HSB to unit RGB components, each in [0, 1]
fn hsb_to_unit_rgb(hsb: Hsb) -> (f64, f64, f64) {
    let h = hsb.h.rem_euclid(360.0) / 360.0;
    let s = (hsb.s / 100.0).clamp(0.0, 1.0);
    let v = (hsb.b / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        return (v, v, v);
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSB to RGB with each channel truncated
pub(crate) fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let (r, g, b) = hsb_to_unit_rgb(hsb);
    let truncate = |c: f64| (c.clamp(0.0, 1.0) * 255.0) as u8;
    Rgb::new(truncate(r), truncate(g), truncate(b))
}

/// HSB to lowercase `#rrggbb`, each channel rounded
pub(crate) fn hsb_to_hex(hsb: Hsb) -> String {
    let (r, g, b) = hsb_to_unit_rgb(hsb);
    let round = |c: f64| round_half_even(c.clamp(0.0, 1.0) * 255.0) as u8;
    Rgb::new(round(r), round(g), round(b)).to_hex()
}

pub(crate) fn hex_to_hsb(hex: &str) -> Result<Hsb, FormatError> {
    let hsb = rgb_to_hsb(hex_to_rgb(hex)?);
    trace!("{} -> hsb {:?}", hex, hsb);
    Ok(hsb)
}

/// RGB to CMYK percentages. Pure black is (0, 0, 0, 100).
pub(crate) fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    if rgb == Rgb::BLACK {
        return Cmyk {
            c: 0,
            m: 0,
            y: 0,
            k: 100,
        };
    }

    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let k = 1.0 - r.max(g).max(b);
    let percent = |v: f64| round_half_even(v * 100.0) as u8;

    Cmyk {
        c: percent((1.0 - r - k) / (1.0 - k)),
        m: percent((1.0 - g - k) / (1.0 - k)),
        y: percent((1.0 - b - k) / (1.0 - k)),
        k: percent(k),
    }
}
