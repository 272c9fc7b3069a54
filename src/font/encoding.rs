//! Decoding of raw `name` table strings

use ttf_parser::name::Name;
use ttf_parser::PlatformId;

pub(crate) const MAC_ROMAN_ENCODING_ID: u16 = 0;

/// Mac OS Roman code points for bytes 0x80..=0xFF
const MAC_ROMAN_HIGH: [char; 128] = [
    'Ä', 'Å', 'Ç', 'É', 'Ñ', 'Ö', 'Ü', 'á', 'à', 'â', 'ä', 'ã', 'å', 'ç', 'é', 'è',
    'ê', 'ë', 'í', 'ì', 'î', 'ï', 'ñ', 'ó', 'ò', 'ô', 'ö', 'õ', 'ú', 'ù', 'û', 'ü',
    '†', '°', '¢', '£', '§', '•', '¶', 'ß', '®', '©', '™', '´', '¨', '≠', 'Æ', 'Ø',
    '∞', '±', '≤', '≥', '¥', 'µ', '∂', '∑', '∏', 'π', '∫', 'ª', 'º', 'Ω', 'æ', 'ø',
    '¿', '¡', '¬', '√', 'ƒ', '≈', '∆', '«', '»', '…', '\u{a0}', 'À', 'Ã', 'Õ', 'Œ', 'œ',
    '–', '—', '“', '”', '‘', '’', '÷', '◊', 'ÿ', 'Ÿ', '⁄', '€', '‹', '›', 'ﬁ', 'ﬂ',
    '‡', '·', '‚', '„', '‰', 'Â', 'Ê', 'Á', 'Ë', 'È', 'Í', 'Î', 'Ï', 'Ì', 'Ó', 'Ô',
    '\u{f8ff}', 'Ò', 'Ú', 'Û', 'Ù', 'ı', 'ˆ', '˜', '¯', '˘', '˙', '˚', '¸', '˝', '˛', 'ˇ',
];

/// Decode a name record into text.
///
/// Unicode-encoded records go through ttf-parser; Macintosh records are only
/// decoded for the Roman encoding. Anything else (Windows Shift-JIS, Big5,
/// other Mac scripts...) yields `None`.
pub fn decode_name(name: &Name) -> Option<String> {
    match name.platform_id {
        PlatformId::Unicode | PlatformId::Windows => name.to_string(),
        PlatformId::Macintosh if name.encoding_id == MAC_ROMAN_ENCODING_ID => {
            Some(decode_mac_roman(name.name))
        }
        _ => None,
    }
}

pub fn decode_mac_roman(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                MAC_ROMAN_HIGH[(b - 0x80) as usize]
            }
        })
        .collect()
}
