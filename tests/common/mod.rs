//! Builds minimal sfnt binaries (head, hhea, maxp, name) for tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const FAMILY: u16 = 1;
pub const SUBFAMILY: u16 = 2;

/// One `name` table record
#[derive(Debug, Clone)]
pub struct NameEntry {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
}

fn utf16_be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

/// Windows, Unicode BMP, US English
pub fn win(name_id: u16, text: &str) -> NameEntry {
    win_lang(name_id, 0x0409, text)
}

pub fn win_lang(name_id: u16, language_id: u16, text: &str) -> NameEntry {
    NameEntry {
        platform_id: 3,
        encoding_id: 1,
        language_id,
        name_id,
        bytes: utf16_be(text),
    }
}

/// Windows record with an arbitrary encoding ID and raw bytes
pub fn win_encoded(name_id: u16, encoding_id: u16, bytes: &[u8]) -> NameEntry {
    NameEntry {
        platform_id: 3,
        encoding_id,
        language_id: 0x0411,
        name_id,
        bytes: bytes.to_vec(),
    }
}

/// Macintosh, Roman, English; `bytes` are Mac Roman encoded
pub fn mac(name_id: u16, bytes: &[u8]) -> NameEntry {
    NameEntry {
        platform_id: 1,
        encoding_id: 0,
        language_id: 0,
        name_id,
        bytes: bytes.to_vec(),
    }
}

/// Unicode platform, BMP encoding
pub fn unicode(name_id: u16, text: &str) -> NameEntry {
    NameEntry {
        platform_id: 0,
        encoding_id: 3,
        language_id: 0,
        name_id,
        bytes: utf16_be(text),
    }
}

/// Windows US-English family and subfamily
pub fn names(family: &str, subfamily: &str) -> Vec<NameEntry> {
    vec![win(FAMILY, family), win(SUBFAMILY, subfamily)]
}

fn head() -> Vec<u8> {
    let mut data = vec![0u8; 54];
    data[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    data[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    data[18..20].copy_from_slice(&1000u16.to_be_bytes());
    data
}

fn hhea() -> Vec<u8> {
    let mut data = vec![0u8; 36];
    data[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    data[34..36].copy_from_slice(&1u16.to_be_bytes());
    data
}

fn maxp() -> Vec<u8> {
    let mut data = Vec::new();
    data.extend(0x0000_5000u32.to_be_bytes());
    data.extend(1u16.to_be_bytes());
    data
}

fn name_table(entries: &[NameEntry]) -> Vec<u8> {
    let count = entries.len() as u16;
    let storage_offset = 6 + 12 * count;

    let mut records = Vec::new();
    let mut storage: Vec<u8> = Vec::new();
    for entry in entries {
        for value in [
            entry.platform_id,
            entry.encoding_id,
            entry.language_id,
            entry.name_id,
            entry.bytes.len() as u16,
            storage.len() as u16,
        ] {
            records.extend(value.to_be_bytes());
        }
        storage.extend(&entry.bytes);
    }

    let mut data = Vec::new();
    data.extend(0u16.to_be_bytes());
    data.extend(count.to_be_bytes());
    data.extend(storage_offset.to_be_bytes());
    data.extend(records);
    data.extend(storage);
    data
}

fn pad4(data: &mut Vec<u8>) {
    while data.len() % 4 != 0 {
        data.push(0);
    }
}

/// A TrueType font whose table offsets assume it starts at `base` in the file
fn sfnt_at(entries: &[NameEntry], base: usize) -> Vec<u8> {
    // tags must stay sorted
    let tables: [(&[u8; 4], Vec<u8>); 4] = [
        (b"head", head()),
        (b"hhea", hhea()),
        (b"maxp", maxp()),
        (b"name", name_table(entries)),
    ];
    let header_len = 12 + 16 * tables.len();

    let mut out = Vec::new();
    out.extend(0x0001_0000u32.to_be_bytes());
    out.extend((tables.len() as u16).to_be_bytes());
    out.extend([0u8; 6]);

    let mut body = Vec::new();
    for (tag, data) in &tables {
        let offset = base + header_len + body.len();
        out.extend(tag.iter());
        out.extend(0u32.to_be_bytes());
        out.extend((offset as u32).to_be_bytes());
        out.extend((data.len() as u32).to_be_bytes());
        body.extend(data);
        pad4(&mut body);
    }
    out.extend(body);
    out
}

pub fn font_bytes(entries: &[NameEntry]) -> Vec<u8> {
    sfnt_at(entries, 0)
}

pub fn collection_bytes(fonts: &[Vec<NameEntry>]) -> Vec<u8> {
    let header_len = 12 + 4 * fonts.len();
    let mut offsets = Vec::new();
    let mut bodies = Vec::new();
    for entries in fonts {
        let base = header_len + bodies.len();
        offsets.push(base as u32);
        bodies.extend(sfnt_at(entries, base));
        pad4(&mut bodies);
    }

    let mut out = b"ttcf".to_vec();
    out.extend(0x0001_0000u32.to_be_bytes());
    out.extend((fonts.len() as u32).to_be_bytes());
    for offset in offsets {
        out.extend(offset.to_be_bytes());
    }
    out.extend(bodies);
    out
}

/// Write `bytes` to `root/relative`, creating parent folders
pub fn write_file(root: &Path, relative: &str, bytes: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(&path, bytes).expect("write font");
    path
}

/// Write a single font with a Windows family/subfamily
pub fn write_font(root: &Path, relative: &str, family: &str, subfamily: &str) -> PathBuf {
    write_file(root, relative, &font_bytes(&names(family, subfamily)))
}
