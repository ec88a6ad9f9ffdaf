//! CSS custom properties export

use crate::palette::Palette;

const USAGE_EXAMPLE: &str = "/* EXAMPLE USAGE */
/* .header { */
/* background-color: var(--primary-500); */
/* color: var(--neutral-900); */
/* } */

/* Button Styles */
/* .button { */
/*   background-color: var(--secondary-500); */
/*   color: var(--neutral-100); */
/* } */

";

/// One `--{role}-{key}` variable per shade inside `:root`
pub(super) fn render(palette: &Palette) -> String {
    let mut out = String::from(USAGE_EXAMPLE);
    out.push_str("/* Color Variables */\n");
    out.push_str(":root {\n");
    for ramp in palette.ramps() {
        for shade in ramp.shades() {
            out.push_str(&format!(
                "  --{}-{}: {};\n",
                ramp.role().key(),
                shade.key,
                shade.swatch().hex
            ));
        }
    }
    out.push_str("}\n");
    out
}
