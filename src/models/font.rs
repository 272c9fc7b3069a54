use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Magic tag at the start of a TrueType/OpenType collection
const COLLECTION_MAGIC: [u8; 4] = *b"ttcf";

/// Container layout of a font file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// One font per file (.ttf, .otf)
    Single,
    /// Several fonts bundled in one file (.ttc, .otc)
    Collection,
}

impl ContainerKind {
    /// Detect the container kind from the file header, falling back to the extension
    pub fn detect(path: &Path) -> Self {
        let mut header = [0u8; 4];
        let sniffed = File::open(path).and_then(|mut file| file.read_exact(&mut header));
        match sniffed {
            Ok(()) if header == COLLECTION_MAGIC => ContainerKind::Collection,
            Ok(()) => ContainerKind::Single,
            Err(_) => Self::from_extension(path),
        }
    }

    pub fn from_extension(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("ttc") | Some("otc") => ContainerKind::Collection,
            _ => ContainerKind::Single,
        }
    }
}

/// A font file found by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub kind: ContainerKind,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>, kind: ContainerKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Build a `FontFile`, sniffing the container kind from disk
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = ContainerKind::detect(&path);
        Self { path, kind }
    }

    pub fn is_collection(&self) -> bool {
        self.kind == ContainerKind::Collection
    }

    /// Original file name, lossily converted
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without extension
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Lowercased extension, empty when the file has none
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

/// Where a name string was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameSource {
    /// Windows platform, US-English (0x0409)
    WindowsEnglish,
    /// Windows platform, any language
    Windows,
    /// Macintosh platform, Roman encoding
    MacRoman,
    /// First decodable record of any platform
    AnyRecord,
    /// Font loader fallback (e.g. the CFF top DICT)
    Loader,
    /// Derived from the file name
    FileName,
    /// Built-in default value
    Default,
}

/// Family and subfamily names of one font instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    /// Index of the font inside its file; always 0 for single fonts
    pub index: u32,
    pub family: String,
    pub subfamily: String,
    pub family_source: NameSource,
    pub subfamily_source: NameSource,
}
