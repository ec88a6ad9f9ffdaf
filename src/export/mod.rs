//! Palette export adapters
//!
//! Every adapter reads a finished [`Palette`] and never changes it. Text
//! formats are rendered to a string first and written in one go.

mod css;
mod dart;
mod json;
mod spreadsheet;
mod swatch;
mod typescript;

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::info;
use thiserror::Error;

use crate::palette::Palette;

#[derive(Debug, Error)]
pub(crate) enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to save image: {0}")]
    Image(String),
    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Swatch sheet image
    Png,
    /// SpreadsheetML workbook (Excel, LibreOffice)
    Spreadsheet,
    /// CSS custom properties
    Css,
    /// TypeScript theme constants
    Typescript,
    /// Flutter color constants
    Dart,
    /// Structured palette data
    Json,
}

impl ExportFormat {
    pub(crate) const ALL: [ExportFormat; 6] = [
        ExportFormat::Png,
        ExportFormat::Spreadsheet,
        ExportFormat::Css,
        ExportFormat::Typescript,
        ExportFormat::Dart,
        ExportFormat::Json,
    ];

    pub(crate) fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Spreadsheet => "xml",
            ExportFormat::Css => "css",
            ExportFormat::Typescript => "ts",
            ExportFormat::Dart => "dart",
            ExportFormat::Json => "json",
        }
    }

    /// `{stem}-color-palette.{ext}`
    pub(crate) fn file_name(self, stem: &str) -> String {
        format!("{}-color-palette.{}", stem, self.extension())
    }

    /// Render `palette` in this format to `path`
    pub(crate) fn export(self, palette: &Palette, title: &str, path: &Path) -> Result<(), ExportError> {
        match self {
            ExportFormat::Png => swatch::render_swatch_sheet(palette, title, path)?,
            ExportFormat::Spreadsheet => write_text(path, &spreadsheet::render(palette))?,
            ExportFormat::Css => write_text(path, &css::render(palette))?,
            ExportFormat::Typescript => write_text(path, &typescript::render(palette))?,
            ExportFormat::Dart => write_text(path, &dart::render(palette))?,
            ExportFormat::Json => write_text(path, &json::render(palette)?)?,
        }
        info!("wrote {}", path.display());
        Ok(())
    }
}

fn write_text(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
