//! Flutter color constants export

use crate::palette::{Palette, Role};

/// `#3366cc` -> `0xFF3366CC`
fn flutter_color(hex: &str) -> String {
    format!("0xFF{}", hex.trim_start_matches('#').to_uppercase())
}

/// `PaletteComponents` class with a color map per role and material
/// swatches for the seeded roles
pub(super) fn render(palette: &Palette) -> String {
    let mut out = String::from("import 'package:flutter/material.dart';\n\n");
    out.push_str("// Centralized shared components for theme configuration\n");
    out.push_str("class PaletteComponents {\n");

    for ramp in palette.ramps() {
        out.push_str(&format!(
            "  static const Map<int, Color> {} = {{\n",
            ramp.role().key()
        ));
        for shade in ramp.shades() {
            out.push_str(&format!(
                "    {}: Color({}),\n",
                shade.key,
                flutter_color(&shade.swatch().hex)
            ));
        }
        out.push_str("  };\n\n");
    }

    out.push_str("  // Material Color Swatches\n");
    for role in [Role::Primary, Role::Secondary, Role::Tertiary] {
        let Some(ramp) = palette.ramp(role) else {
            continue;
        };
        out.push_str(&format!(
            "  static const MaterialColor {}Swatch = MaterialColor(\n",
            role.key()
        ));
        out.push_str(&format!("    {},\n", flutter_color(&ramp.base().swatch().hex)));
        out.push_str(&format!("    {},\n", role.key()));
        out.push_str("  );\n\n");
    }

    out.push_str("}\n");
    out
}
