use std::fs;
use std::sync::Arc;

use font_kit::font::Font;
use ttf_parser::{fonts_in_collection, name_id, Face, PlatformId};
use tracing::{debug, warn};

use super::encoding::{decode_name, MAC_ROMAN_ENCODING_ID};
use crate::error::{Error, Result};
use crate::models::{FontFile, NameRecord, NameSource};

/// Windows language ID for US English
const WINDOWS_US_ENGLISH: u16 = 0x0409;

/// Subfamily used when a font does not name its style
pub const DEFAULT_SUBFAMILY: &str = "Regular";

/// Name-table tiers in priority order
const TIERS: [NameSource; 4] = [
    NameSource::WindowsEnglish,
    NameSource::Windows,
    NameSource::MacRoman,
    NameSource::AnyRecord,
];

/// Read the family/subfamily names of every font in `file`.
///
/// Single fonts yield one record; collections yield one record per embedded
/// font that parses, tagged with its index.
pub fn read_names(file: &FontFile) -> Result<Vec<NameRecord>> {
    debug!(path = %file.path.display(), "Extracting names");

    let data = fs::read(&file.path).map_err(|e| Error::font_read(&file.path, e))?;

    match fonts_in_collection(&data) {
        Some(count) => read_collection(file, &data, count),
        None => read_face(file, &data, 0).map(|record| vec![record]),
    }
}

fn read_collection(file: &FontFile, data: &[u8], count: u32) -> Result<Vec<NameRecord>> {
    if count == 0 {
        return Err(Error::font_read(&file.path, "collection holds no fonts"));
    }

    let mut records = Vec::with_capacity(count as usize);
    for index in 0..count {
        match read_face(file, data, index) {
            Ok(record) => records.push(record),
            Err(e) => warn!(
                path = %file.path.display(),
                index,
                error = %e,
                "Skipping unreadable font in collection"
            ),
        }
    }

    if records.is_empty() {
        return Err(Error::font_read(
            &file.path,
            "no font in the collection could be parsed",
        ));
    }
    Ok(records)
}

fn read_face(file: &FontFile, data: &[u8], index: u32) -> Result<NameRecord> {
    let face = Face::parse(data, index).map_err(|e| Error::font_read(&file.path, e))?;

    let (family, family_source) = best_name(&face, name_id::FAMILY)
        .or_else(|| loader_family(data, index).map(|name| (name, NameSource::Loader)))
        .unwrap_or_else(|| (file.stem(), NameSource::FileName));

    let (subfamily, subfamily_source) = best_name(&face, name_id::SUBFAMILY)
        .unwrap_or_else(|| (DEFAULT_SUBFAMILY.to_string(), NameSource::Default));

    debug!(
        path = %file.path.display(),
        index,
        family = %family,
        subfamily = %subfamily,
        ?family_source,
        ?subfamily_source,
        "Names extracted"
    );

    Ok(NameRecord {
        index,
        family,
        subfamily,
        family_source,
        subfamily_source,
    })
}

/// Pick the best string for `id`, first record per tier in table order
fn best_name(face: &Face, id: u16) -> Option<(String, NameSource)> {
    let mut slots: [Option<String>; 4] = Default::default();

    for name in face.names() {
        if name.name_id != id {
            continue;
        }
        let tier = match name.platform_id {
            PlatformId::Windows if name.language_id == WINDOWS_US_ENGLISH => 0,
            PlatformId::Windows => 1,
            PlatformId::Macintosh if name.encoding_id == MAC_ROMAN_ENCODING_ID => 2,
            _ => 3,
        };
        if slots[tier].is_some() {
            continue;
        }
        if let Some(text) = decode_name(&name) {
            let text = text.trim();
            if !text.is_empty() {
                slots[tier] = Some(text.to_string());
            }
        }
    }

    slots
        .into_iter()
        .zip(TIERS)
        .find_map(|(slot, source)| slot.map(|text| (text, source)))
}

/// Family name as seen by the platform font loader (reads e.g. the CFF top DICT)
fn loader_family(data: &[u8], index: u32) -> Option<String> {
    match Font::from_bytes(Arc::new(data.to_vec()), index) {
        Ok(font) => {
            let family = font.family_name();
            let family = family.trim();
            (!family.is_empty()).then(|| family.to_string())
        }
        Err(e) => {
            debug!(index, error = ?e, "Font loader could not open face");
            None
        }
    }
}
