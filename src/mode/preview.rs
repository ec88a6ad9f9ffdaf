//! Terminal preview of a palette

use crate::output::{print_legend, print_palette, print_seeds};

use super::Seeds;

/// Print the composed palette without writing any files
pub(crate) fn run_preview(seeds: &Seeds, quiet: bool) -> Result<(), String> {
    let palette = seeds.compose()?;

    if !quiet {
        println!("Palette Preview");
        print_seeds(&seeds.describe()?);
    }

    print_palette(&palette);

    if !quiet {
        println!();
        print_legend();
    }

    Ok(())
}
