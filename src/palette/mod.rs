//! Palette model: roles, shade ramps and the composed palette

mod compose;
mod shades;

use std::fmt;

use crate::color::{Cmyk, Hsb, Rgb, contrast_color, hsb_to_hex, hsb_to_rgb, rgb_to_cmyk};

pub(crate) use compose::compose;
pub(crate) use shades::generate_shades;

/// Named ramp within a palette, in palette order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Role {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    Green,
    Orange,
    Red,
    Blue,
}

impl Role {
    pub(crate) const ALL: [Role; 8] = [
        Role::Primary,
        Role::Secondary,
        Role::Tertiary,
        Role::Neutral,
        Role::Green,
        Role::Orange,
        Role::Red,
        Role::Blue,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::Secondary => "Secondary",
            Role::Tertiary => "Tertiary",
            Role::Neutral => "Neutral",
            Role::Green => "Green",
            Role::Orange => "Orange",
            Role::Red => "Red",
            Role::Blue => "Blue",
        }
    }

    /// Lowercase identifier used by CSS variables, source constants and JSON keys
    pub(crate) fn key(self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Tertiary => "tertiary",
            Role::Neutral => "neutral",
            Role::Green => "green",
            Role::Orange => "orange",
            Role::Red => "red",
            Role::Blue => "blue",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Design-system weight, 100 (lightest) to 900 (darkest)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ShadeKey(u16);

impl ShadeKey {
    pub(crate) const BASE: ShadeKey = ShadeKey(500);

    pub(crate) const ALL: [ShadeKey; 9] = [
        ShadeKey(100),
        ShadeKey(200),
        ShadeKey(300),
        ShadeKey(400),
        ShadeKey(500),
        ShadeKey(600),
        ShadeKey(700),
        ShadeKey(800),
        ShadeKey(900),
    ];

    pub(crate) fn value(self) -> u16 {
        self.0
    }

    /// Position in [`ShadeKey::ALL`]
    fn index(self) -> usize {
        usize::from(self.value() / 100 - 1)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Shade {
    pub(crate) key: ShadeKey,
    pub(crate) hsb: Hsb,
}

impl Shade {
    /// Everything an exporter needs to draw or name this shade
    pub(crate) fn swatch(&self) -> Swatch {
        let rgb = hsb_to_rgb(self.hsb);
        Swatch {
            key: self.key,
            hsb: self.hsb,
            rgb,
            hex: hsb_to_hex(self.hsb),
            cmyk: rgb_to_cmyk(rgb),
            text: contrast_color(rgb),
        }
    }
}

/// Derived, read-only view of one shade
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Swatch {
    pub(crate) key: ShadeKey,
    pub(crate) hsb: Hsb,
    /// Truncated channels
    pub(crate) rgb: Rgb,
    /// Rounded channels, lowercase `#rrggbb`
    pub(crate) hex: String,
    pub(crate) cmyk: Cmyk,
    /// Legible foreground over this swatch
    pub(crate) text: Rgb,
}

impl Swatch {
    /// Multi-line label shared by the image and spreadsheet exports
    pub(crate) fn label(&self) -> String {
        format!(
            "Weight - {}\nHSB - {}\nRGB - {}\nHEX - {}\nCMYK - {}",
            self.key, self.hsb, self.rgb, self.hex, self.cmyk
        )
    }
}

/// Nine shades of one role, ascending by key
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Ramp {
    role: Role,
    shades: [Shade; 9],
}

impl Ramp {
    fn new(role: Role, shades: [Shade; 9]) -> Self {
        Self { role, shades }
    }

    pub(crate) fn role(&self) -> Role {
        self.role
    }

    pub(crate) fn shades(&self) -> &[Shade; 9] {
        &self.shades
    }

    pub(crate) fn shade(&self, key: ShadeKey) -> &Shade {
        &self.shades[key.index()]
    }

    pub(crate) fn base(&self) -> &Shade {
        self.shade(ShadeKey::BASE)
    }
}

/// Composed palette. Built once by [`compose`]; there is no way to modify it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Palette {
    ramps: Vec<Ramp>,
}

impl Palette {
    pub(crate) fn ramps(&self) -> &[Ramp] {
        &self.ramps
    }

    pub(crate) fn ramp(&self, role: Role) -> Option<&Ramp> {
        self.ramps.iter().find(|r| r.role == role)
    }

    pub(crate) fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.ramps.iter().map(|r| r.role)
    }

    pub(crate) fn len(&self) -> usize {
        self.ramps.len()
    }
}
