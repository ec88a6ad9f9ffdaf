//! Structured palette data export
//!
//! ```text
//! { "primary": { "name": "Primary", "shades": { "100": { "hsb": [..], "rgb": [..], "hex": "#..", "cmyk": [..] } } } }
//! ```
//! Roles and shades keep palette order.

use serde::{Serialize, Serializer};

use crate::palette::{Palette, Ramp, Shade};

struct PaletteDoc<'a>(&'a Palette);

#[derive(Serialize)]
struct RampDoc<'a> {
    name: &'static str,
    shades: ShadesDoc<'a>,
}

struct ShadesDoc<'a>(&'a [Shade; 9]);

#[derive(Serialize)]
struct ShadeDoc {
    hsb: [i32; 3],
    rgb: [u8; 3],
    hex: String,
    cmyk: [u8; 4],
}

impl Serialize for PaletteDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .ramps()
                .iter()
                .map(|ramp| (ramp.role().key(), RampDoc::from(ramp))),
        )
    }
}

impl<'a> From<&'a Ramp> for RampDoc<'a> {
    fn from(ramp: &'a Ramp) -> Self {
        Self {
            name: ramp.role().name(),
            shades: ShadesDoc(ramp.shades()),
        }
    }
}

impl Serialize for ShadesDoc<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|shade| {
            let swatch = shade.swatch();
            let doc = ShadeDoc {
                hsb: swatch.hsb.components(),
                rgb: [swatch.rgb.r, swatch.rgb.g, swatch.rgb.b],
                hex: swatch.hex,
                cmyk: [swatch.cmyk.c, swatch.cmyk.m, swatch.cmyk.y, swatch.cmyk.k],
            };
            (shade.key.to_string(), doc)
        }))
    }
}

pub(super) fn render(palette: &Palette) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(&PaletteDoc(palette))?;
    json.push('\n');
    Ok(json)
}
