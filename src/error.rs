use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for fontfold operations
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The font could not be opened or its name tables could not be parsed
    #[error("Font read error for {}: {reason}", path.display())]
    FontRead { path: PathBuf, reason: String },
    /// Invalid source root
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// The source root holds no supported font files
    #[error("No font files (.ttf, .otf, .ttc, .otc) found in {}", .0.display())]
    NoFontsFound(PathBuf),
    /// Every numbered variant of a file name is already taken
    #[error("No free name for {file_name} in {}", folder.display())]
    ConflictResolutionExhausted { folder: PathBuf, file_name: String },
    /// Copy or move failed; the source file is left where it was
    #[error("Could not transfer {} to {}: {source}", from.display(), to.display())]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    /// CSV log errors
    #[error("Log error: {0}")]
    Log(#[from] csv::Error),
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn font_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::FontRead {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Pre-flight errors stop the run; everything else is reported per file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidPath(_) | Error::NoFontsFound(_) | Error::Config(_)
        )
    }
}

/// Result type alias for fontfold operations
pub type Result<T> = std::result::Result<T, Error>;
