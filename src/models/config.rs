use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Configuration for the font organization process
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Whether fonts are copied or moved into their folders
    pub action: TransferAction,
    /// Where family folders are created; the source root when unset
    pub output_root: Option<PathBuf>,
    /// External keyword list, one keyword per line
    pub keywords_path: Option<PathBuf>,
    /// CSV log destination; no log is written when unset
    pub log_file: Option<PathBuf>,
    /// Rename single-font files to "Family Subfamily.ext"
    pub rename_files: bool,
    /// Read font metadata on the rayon pool
    pub parallel_reads: bool,
}

/// How a font reaches its destination folder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TransferAction {
    #[default]
    Copy,
    Move,
}

impl fmt::Display for TransferAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferAction::Copy => write!(f, "copy"),
            TransferAction::Move => write!(f, "move"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(action: TransferAction) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }

    /// Folder that receives the family folders for a run over `source_root`
    pub fn destination_root<'a>(&'a self, source_root: &'a Path) -> &'a Path {
        self.output_root.as_deref().unwrap_or(source_root)
    }
}
