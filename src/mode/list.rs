//! Listing of indexed palettes

use std::path::Path;

use crate::library::PaletteIndex;
use crate::output::print_index;

pub(crate) fn run_list(out_dir: &Path, quiet: bool) -> Result<(), String> {
    let index = PaletteIndex::load(out_dir).map_err(|e| e.to_string())?;

    if index.entries().is_empty() {
        if !quiet {
            println!("No palettes in {}", out_dir.display());
        }
        return Ok(());
    }

    print_index(index.entries());

    if !quiet {
        println!();
        println!(
            "{} palette(s) in {}",
            index.entries().len(),
            index.root().display()
        );
    }

    Ok(())
}
