use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::TransferAction;

/// Create a directory if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!(dir = %dir.display(), "Directory does not exist. Creating it now.");
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Copy or move `src` to `dest` according to `action`
pub fn transfer_file(src: &Path, dest: &Path, action: TransferAction) -> Result<()> {
    let outcome = match action {
        TransferAction::Copy => copy_file(src, dest),
        TransferAction::Move => safe_move_file(src, dest),
    };
    outcome.map_err(|source| Error::Transfer {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })
}

/// Copy a file, removing a partial destination on failure
pub fn copy_file(src: &Path, dest: &Path) -> io::Result<()> {
    if let Err(e) = fs::copy(src, dest) {
        discard_partial(dest);
        return Err(e);
    }
    Ok(())
}

/// Move a file with fallback to copy+delete if rename fails.
///
/// The source is only deleted once the copy succeeded; if it cannot be
/// deleted the copy is removed again so the file exists in exactly one place.
pub fn safe_move_file(src: &Path, dest: &Path) -> io::Result<()> {
    // First try to rename (fast path)
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(e) => {
            debug!(
                src = %src.display(),
                error = %e,
                "Rename failed, trying copy+delete"
            );

            copy_file(src, dest)?;

            if let Err(e) = fs::remove_file(src) {
                warn!(
                    src = %src.display(),
                    error = %e,
                    "Could not delete source after copying, rolling back"
                );
                discard_partial(dest);
                return Err(e);
            }
            Ok(())
        }
    }
}

fn discard_partial(dest: &Path) {
    if dest.exists() {
        if let Err(e) = fs::remove_file(dest) {
            warn!(dest = %dest.display(), error = %e, "Could not remove partial copy");
        }
    }
}
