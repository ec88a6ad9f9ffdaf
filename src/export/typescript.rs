//! TypeScript theme constants export

use crate::palette::Palette;

pub(super) fn render(palette: &Palette) -> String {
    let mut out = String::from("// Centralized shared components for theme configuration\n");
    out.push_str("const paletteComponents = {\n");
    for ramp in palette.ramps() {
        out.push_str(&format!("  {}: {{\n", ramp.role().key()));
        for shade in ramp.shades() {
            out.push_str(&format!("    {}: '{}',\n", shade.key, shade.swatch().hex));
        }
        out.push_str("  },\n");
    }
    out.push_str("};\n\n");
    out.push_str("export default paletteComponents;\n");
    out
}
