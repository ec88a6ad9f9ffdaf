//! Palette deletion through the index

use std::path::Path;

use crate::library::PaletteIndex;

/// Delete the files recorded for `name` and drop it from the index
pub(crate) fn run_delete(name: &str, out_dir: &Path, quiet: bool) -> Result<(), String> {
    let mut index = PaletteIndex::load(out_dir).map_err(|e| e.to_string())?;
    let entry = index.remove(name).map_err(|e| e.to_string())?;
    index.save().map_err(|e| e.to_string())?;

    if !quiet {
        println!(
            "Deleted palette '{}' ({} files)",
            entry.name,
            entry.files.len()
        );
    }

    Ok(())
}
