//! Palette generation: compose, export, record in the index

use std::fs;
use std::path::Path;

use log::info;

use crate::export::ExportFormat;
use crate::library::{IndexEntry, PaletteIndex, slugify, unix_now};
use crate::output::{print_legend, print_palette, print_warning};

use super::Seeds;

/// Write `formats` for the palette into `{out_dir}/{slug}/` and record it.
///
/// Files written before a failing export are still recorded, so `delete`
/// can clean them up. Files of an earlier run under the same slug that this
/// run did not write are deleted.
pub(crate) fn run_generate(
    name: &str,
    seeds: &Seeds,
    out_dir: &Path,
    formats: &[ExportFormat],
    quiet: bool,
) -> Result<(), String> {
    let palette = seeds.compose()?;
    let slug = slugify(name);
    let palette_dir = out_dir.join(&slug);

    let mut index = PaletteIndex::load(out_dir).map_err(|e| e.to_string())?;
    if let Some(existing) = index.find(&slug) {
        print_warning(&format!("Replacing existing palette '{}'", existing.name));
    }

    fs::create_dir_all(&palette_dir)
        .map_err(|e| format!("Failed to create {}: {}", palette_dir.display(), e))?;

    let mut files = Vec::with_capacity(formats.len());
    let mut failure = None;

    for format in formats {
        let file_name = format.file_name(&slug);
        let path = palette_dir.join(&file_name);

        if !quiet {
            eprint!("Writing {}...", file_name);
        }

        match format.export(&palette, name, &path) {
            Ok(()) => {
                if !quiet {
                    eprintln!(" done");
                }
                println!("{}", path.display());
                files.push(format!("{}/{}", slug, file_name));
            }
            Err(e) => {
                if !quiet {
                    eprintln!(" failed");
                }
                failure = Some(e.to_string());
                break;
            }
        }
    }

    if !files.is_empty() {
        index.record(IndexEntry {
            name: name.to_string(),
            slug: slug.clone(),
            primary: seeds.primary.clone(),
            secondary: seeds.secondary.clone(),
            tertiary: seeds.tertiary.clone(),
            created_at: unix_now(),
            files,
        })
        .map_err(|e| e.to_string())?;
        index.save().map_err(|e| e.to_string())?;
        info!("recorded '{}' in {}", name, out_dir.display());
    }

    if let Some(e) = failure {
        return Err(e);
    }

    if !quiet {
        println!();
        println!("Palette '{}' saved to {}", name, palette_dir.display());
        println!();
        print_palette(&palette);
        println!();
        print_legend();
    }

    Ok(())
}
