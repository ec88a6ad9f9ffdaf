//! Persisted index of generated palettes
//!
//! `palettes.json` in the output root lists every palette and the files
//! written for it. Listing and deleting go through the index only; the
//! output directory is never scanned.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) const INDEX_FILE: &str = "palettes.json";

#[derive(Debug, Error)]
pub(crate) enum IndexError {
    #[error("failed to access {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed palette index {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no palette named '{0}'")]
    NotFound(String),
    #[error("refusing to touch '{0}': index paths must stay inside the output directory")]
    UnsafePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct IndexEntry {
    pub(crate) name: String,
    pub(crate) slug: String,
    pub(crate) primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) tertiary: Option<String>,
    /// Unix seconds
    pub(crate) created_at: u64,
    /// Paths relative to the output root
    pub(crate) files: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct PaletteIndex {
    #[serde(skip)]
    root: PathBuf,
    palettes: Vec<IndexEntry>,
}

/// Filesystem-safe palette identifier
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "palette".to_string()
    } else {
        slug
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> IndexError + '_ {
    move |source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl PaletteIndex {
    /// Load the index under `root`; a missing index file is an empty index
    pub(crate) fn load(root: &Path) -> Result<Self, IndexError> {
        let path = root.join(INDEX_FILE);
        let mut index = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<PaletteIndex>(&contents).map_err(|source| {
                IndexError::Malformed {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no index at {}, starting empty", path.display());
                PaletteIndex::default()
            }
            Err(source) => return Err(IndexError::Io { path, source }),
        };
        index.root = root.to_path_buf();
        Ok(index)
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn entries(&self) -> &[IndexEntry] {
        &self.palettes
    }

    /// Look up by exact name, then by slug
    pub(crate) fn find(&self, name: &str) -> Option<&IndexEntry> {
        self.position(name).map(|i| &self.palettes[i])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.palettes
            .iter()
            .position(|e| e.name == name)
            .or_else(|| {
                let slug = slugify(name);
                self.palettes.iter().position(|e| e.slug == slug)
            })
    }

    /// Add `entry`, replacing any entry with the same slug.
    ///
    /// Files of the replaced entry that `entry` no longer lists are deleted,
    /// so everything on disk under the slug stays tracked.
    pub(crate) fn record(&mut self, entry: IndexEntry) -> Result<(), IndexError> {
        let Some(position) = self.palettes.iter().position(|e| e.slug == entry.slug) else {
            self.palettes.push(entry);
            return Ok(());
        };

        let previous = std::mem::replace(&mut self.palettes[position], entry);
        debug!("replacing index entry '{}'", previous.name);
        let current = &self.palettes[position].files;
        for file in previous.files.iter().filter(|f| !current.contains(f)) {
            self.delete_file(file)?;
        }
        Ok(())
    }

    /// Drop the entry and delete the files it lists, then its directory if
    /// nothing else is left in it
    pub(crate) fn remove(&mut self, name: &str) -> Result<IndexEntry, IndexError> {
        let position = self
            .position(name)
            .ok_or_else(|| IndexError::NotFound(name.to_string()))?;

        // Validate everything before deleting anything
        for file in &self.palettes[position].files {
            self.resolve(file)?;
        }
        let entry = self.palettes.remove(position);
        for file in &entry.files {
            self.delete_file(file)?;
        }

        let dir = self.root.join(&entry.slug);
        if let Err(e) = fs::remove_dir(&dir) {
            debug!("kept {}: {}", dir.display(), e);
        }

        Ok(entry)
    }

    /// Absolute path of an index-relative file; only plain relative paths
    /// are accepted
    fn resolve(&self, file: &str) -> Result<PathBuf, IndexError> {
        let relative = Path::new(file);
        let plain = relative.components().next().is_some()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !plain {
            return Err(IndexError::UnsafePath(file.to_string()));
        }
        Ok(self.root.join(relative))
    }

    fn delete_file(&self, file: &str) -> Result<(), IndexError> {
        let path = self.resolve(file)?;
        match fs::remove_file(&path) {
            Ok(()) => info!("deleted {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("{} already gone", path.display());
            }
            Err(source) => return Err(IndexError::Io { path, source }),
        }
        Ok(())
    }

    /// Write the index atomically (temp file, then rename)
    pub(crate) fn save(&self) -> Result<(), IndexError> {
        let path = self.root.join(INDEX_FILE);
        let tmp = self.root.join(format!("{}.tmp", INDEX_FILE));

        let mut contents =
            serde_json::to_string_pretty(self).map_err(|source| IndexError::Malformed {
                path: path.clone(),
                source,
            })?;
        contents.push('\n');

        fs::create_dir_all(&self.root).map_err(io_error(&self.root))?;
        fs::write(&tmp, contents).map_err(io_error(&tmp))?;
        fs::rename(&tmp, &path).map_err(io_error(&path))?;
        debug!("saved {} palettes to {}", self.palettes.len(), path.display());
        Ok(())
    }
}
