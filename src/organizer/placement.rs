use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::FontFile;
use crate::utils::sanitize_segment;

/// Folder that receives every collection file; the prefix sorts it first
pub const COLLECTION_FOLDER: &str = "00 TrueType Collection Fonts";

/// Highest `_N` suffix tried before giving up on a name
const MAX_SUFFIX: u32 = 9_999;

/// File names handed out during one run, per destination folder.
///
/// Names compare case-insensitively so two fonts never collide on a
/// case-insensitive filesystem.
#[derive(Debug, Default)]
pub struct Claims {
    by_folder: HashMap<PathBuf, HashSet<String>>,
}

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, folder: &Path, file_name: &str) -> bool {
        self.by_folder
            .get(folder)
            .is_some_and(|names| names.contains(&file_name.to_lowercase()))
    }

    fn claim(&mut self, folder: &Path, file_name: &str) {
        self.by_folder
            .entry(folder.to_path_buf())
            .or_default()
            .insert(file_name.to_lowercase());
    }

    /// Number of names claimed in `folder`
    pub fn claimed_in(&self, folder: &Path) -> usize {
        self.by_folder.get(folder).map_or(0, HashSet::len)
    }
}

/// Where a font will land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementDecision {
    pub destination_folder: PathBuf,
    pub file_name: String,
    /// The source already sits at the chosen path
    pub in_place: bool,
}

impl PlacementDecision {
    pub fn final_path(&self) -> PathBuf {
        self.destination_folder.join(&self.file_name)
    }
}

/// Maps canonical families to folders under a destination root
#[derive(Debug, Clone)]
pub struct PlacementResolver {
    root: PathBuf,
}

impl PlacementResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination folder for `file`, ignoring the family for collections
    pub fn folder_for(&self, file: &FontFile, canonical_family: &str) -> PathBuf {
        if file.is_collection() {
            self.root.join(COLLECTION_FOLDER)
        } else {
            self.root.join(sanitize_segment(canonical_family))
        }
    }

    /// Choose the folder and a file name not yet used on disk or in `claims`,
    /// appending `_1`, `_2`, ... before the extension as needed.
    pub fn resolve(
        &self,
        file: &FontFile,
        canonical_family: &str,
        file_name: &str,
        claims: &mut Claims,
    ) -> Result<PlacementDecision> {
        let folder = self.folder_for(file, canonical_family);

        for n in 0..=MAX_SUFFIX {
            let candidate = if n == 0 {
                file_name.to_string()
            } else {
                numbered_name(file_name, n)
            };

            if claims.is_claimed(&folder, &candidate) {
                continue;
            }

            let path = folder.join(&candidate);
            let in_place = path == file.path;
            if !in_place && path.symlink_metadata().is_ok() {
                continue;
            }

            if n > 0 {
                debug!(
                    original = %file_name,
                    renamed = %candidate,
                    folder = %folder.display(),
                    "Name taken, using numbered variant"
                );
            }
            claims.claim(&folder, &candidate);
            return Ok(PlacementDecision {
                destination_folder: folder,
                file_name: candidate,
                in_place,
            });
        }

        Err(Error::ConflictResolutionExhausted {
            folder,
            file_name: file_name.to_string(),
        })
    }
}

/// "Arial.ttf" -> "Arial_2.ttf"
fn numbered_name(file_name: &str, n: u32) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}_{}.{}", stem, n, ext),
        _ => format!("{}_{}", file_name, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContainerKind;
    use std::fs;
    use tempfile::tempdir;

    fn single(path: &Path) -> FontFile {
        FontFile::new(path, ContainerKind::Single)
    }

    #[test]
    fn numbered_name_goes_before_extension() {
        assert_eq!(numbered_name("Arial.ttf", 1), "Arial_1.ttf");
        assert_eq!(numbered_name("Arial.Bold.otf", 2), "Arial.Bold_2.otf");
        assert_eq!(numbered_name("README", 3), "README_3");
        assert_eq!(numbered_name(".hidden", 1), ".hidden_1");
    }

    #[test]
    fn collections_use_fixed_folder() {
        let resolver = PlacementResolver::new("/out");
        let file = FontFile::new("/in/Helvetica.ttc", ContainerKind::Collection);
        assert_eq!(
            resolver.folder_for(&file, "Helvetica"),
            Path::new("/out").join(COLLECTION_FOLDER)
        );
    }

    #[test]
    fn family_folder_is_sanitized() {
        let resolver = PlacementResolver::new("/out");
        let file = single(Path::new("/in/x.ttf"));
        assert_eq!(resolver.folder_for(&file, "AC/DC"), Path::new("/out/AC_DC"));
        assert_eq!(resolver.folder_for(&file, ".."), Path::new("/out/Unknown"));
    }

    #[test]
    fn same_name_in_one_run_gets_increasing_suffixes() {
        let tmp = tempdir().expect("tempdir");
        let resolver = PlacementResolver::new(tmp.path());
        let mut claims = Claims::new();

        let names: Vec<String> = ["a/Arial.ttf", "b/Arial.ttf", "c/ARIAL.TTF"]
            .iter()
            .map(|p| {
                resolver
                    .resolve(&single(&tmp.path().join(p)), "Arial", "Arial.ttf", &mut claims)
                    .expect("resolve")
                    .file_name
            })
            .collect();

        assert_eq!(names, vec!["Arial.ttf", "Arial_1.ttf", "Arial_2.ttf"]);
        assert_eq!(claims.claimed_in(&tmp.path().join("Arial")), 3);
    }

    #[test]
    fn existing_files_are_skipped() {
        let tmp = tempdir().expect("tempdir");
        let folder = tmp.path().join("Arial");
        fs::create_dir_all(&folder).expect("mkdir");
        fs::write(folder.join("Arial.ttf"), b"").expect("write");

        let resolver = PlacementResolver::new(tmp.path());
        let decision = resolver
            .resolve(
                &single(&tmp.path().join("in/Arial.ttf")),
                "Arial",
                "Arial.ttf",
                &mut Claims::new(),
            )
            .expect("resolve");

        assert_eq!(decision.file_name, "Arial_1.ttf");
        assert_eq!(decision.final_path(), folder.join("Arial_1.ttf"));
        assert!(!decision.in_place);
    }

    #[test]
    fn file_already_in_place_keeps_its_name() {
        let tmp = tempdir().expect("tempdir");
        let folder = tmp.path().join("Arial");
        fs::create_dir_all(&folder).expect("mkdir");
        let existing = folder.join("Arial.ttf");
        fs::write(&existing, b"").expect("write");

        let resolver = PlacementResolver::new(tmp.path());
        let decision = resolver
            .resolve(&single(&existing), "Arial", "Arial.ttf", &mut Claims::new())
            .expect("resolve");

        assert!(decision.in_place);
        assert_eq!(decision.final_path(), existing);
    }
}
