//! Recursive font discovery

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use super::placement::COLLECTION_FOLDER;
use crate::error::{Error, Result};
use crate::models::FontFile;

/// Extensions of the supported container types
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Anything that can list the fonts to organize
pub trait FontDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>>;
}

/// Filesystem walker, sorted by file name so every run sees the same order
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    root: PathBuf,
}

impl PathDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>> {
        if !self.root.is_dir() {
            return Err(Error::InvalidPath(self.root.clone()));
        }

        let mut found = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_collection_folder(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && is_font(entry.path()) {
                found.push(FontFile::detect(entry.path()));
            }
        }

        if found.is_empty() {
            return Err(Error::NoFontsFound(self.root.clone()));
        }

        info!(root = %self.root.display(), count = found.len(), "Discovered font files");
        Ok(found)
    }
}

fn is_collection_folder(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == COLLECTION_FOLDER
}

/// Supported extension, and not an AppleDouble "._" sidecar
pub fn is_font(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with("._") {
        return false;
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
