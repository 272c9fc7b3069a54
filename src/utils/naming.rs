use lazy_static::lazy_static;
use regex::Regex;

use crate::font::KeywordSet;

/// Folder name used when a family name cleans down to nothing
pub const UNKNOWN_FAMILY: &str = "Unknown";

/// Subfamilies that add nothing to a file name
const PLAIN_STYLES: [&str; 4] = ["regular", "normal", "roman", "plain"];

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[-_.]").unwrap();
    static ref CASE_BOUNDARY: Regex = Regex::new(r"(\p{Ll})(\p{Lu})").unwrap();
    static ref ILLEGAL_PATH_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*\p{Cc}]"#).unwrap();
}

/// Split a raw name into words: separators become spaces and
/// lower-to-upper transitions ("HelveticaBold") are broken apart.
pub fn split_words(raw: &str) -> Vec<String> {
    let spaced = SEPARATORS.replace_all(raw, " ");
    let split = CASE_BOUNDARY.replace_all(&spaced, "${1} ${2}");
    split.split_whitespace().map(str::to_string).collect()
}

/// Turn a raw family name into its canonical folder name.
///
/// Pure function of its inputs; never returns an empty string.
pub fn clean(family_raw: &str, keywords: &KeywordSet) -> String {
    let words = split_words(family_raw);
    let cleaned = keywords
        .strip(&words)
        .into_iter()
        .map(title_case)
        .collect::<Vec<String>>()
        .join(" ");

    if cleaned.is_empty() {
        UNKNOWN_FAMILY.to_string()
    } else {
        cleaned
    }
}

/// Uppercase the first letter of a word and lowercase the rest
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

/// Make a name safe to use as a single path segment
pub fn sanitize_segment(name: &str) -> String {
    let replaced = ILLEGAL_PATH_CHARS.replace_all(name, "_");
    let trimmed = replaced.trim_matches(|c: char| c.is_whitespace() || c == '.');

    if trimmed.is_empty() {
        UNKNOWN_FAMILY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// File name for the rename option: "Family Subfamily.ext", dropping the
/// subfamily when it is a plain style or already part of the family.
pub fn styled_file_name(family: &str, subfamily: &str, extension: &str) -> String {
    let family = family.trim();
    let subfamily = subfamily.trim();
    let style = subfamily.to_lowercase();

    let base = if style.is_empty()
        || PLAIN_STYLES.contains(&style.as_str())
        || family.to_lowercase().contains(&style)
    {
        family.to_string()
    } else {
        format!("{} {}", family, subfamily)
    };

    let base = sanitize_segment(&base);
    if extension.is_empty() {
        base
    } else {
        format!("{}.{}", base, extension)
    }
}
