//! Style, weight and width keywords stripped from family names

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::utils::naming::split_words;

/// Built-in list used when no keyword file is configured or readable
pub const DEFAULT_KEYWORDS: &[&str] = &[
    // weight
    "Hairline",
    "Thin",
    "ExtraLight",
    "UltraLight",
    "Light",
    "SemiLight",
    "DemiLight",
    "Book",
    "Regular",
    "Normal",
    "Roman",
    "Plain",
    "Medium",
    "SemiBold",
    "DemiBold",
    "Demi",
    "Bold",
    "ExtraBold",
    "UltraBold",
    "Heavy",
    "Black",
    "ExtraBlack",
    "UltraBlack",
    "Fat",
    "Bk",
    "Lt",
    "Md",
    "Bd",
    "Rg",
    // style
    "Italic",
    "Oblique",
    "Slanted",
    "Inclined",
    "Script",
    "Variable",
    // width
    "Condensed",
    "SemiCondensed",
    "ExtraCondensed",
    "UltraCondensed",
    "Compressed",
    "Narrow",
    "Extended",
    "SemiExtended",
    "Expanded",
    "SemiExpanded",
    "ExtraExpanded",
    "UltraExpanded",
    "Wide",
];

/// Immutable, case-insensitive keyword set.
///
/// Every keyword goes through the same word splitting as family names, so
/// `"ExtraBold"`, `"Extra-Bold"` and `"extra bold"` are the same keyword. It is
/// kept as a phrase of lowercase words and as the words run together, which
/// lets it match either `["Extra", "Bold"]` or a single `"extrabold"` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    joined: HashSet<String>,
    /// Phrases of two or more words, longest first
    phrases: Vec<Vec<String>>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::from_keywords(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordSet {
    /// Load keywords from a line-oriented file, falling back to the built-in list
    pub fn load(source: Option<&Path>) -> Self {
        let Some(path) = source else {
            debug!("No keyword file configured, using built-in keywords");
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                let set = Self::from_keywords(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with('#')),
                );
                if set.is_empty() {
                    warn!(
                        path = %path.display(),
                        "Keyword file has no keywords, using built-in keywords"
                    );
                    Self::default()
                } else {
                    info!(path = %path.display(), count = set.len(), "Loaded keywords");
                    set
                }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not read keyword file, using built-in keywords"
                );
                Self::default()
            }
        }
    }

    pub fn from_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut joined = HashSet::new();
        let mut phrases: Vec<Vec<String>> = Vec::new();

        for keyword in keywords {
            let words: Vec<String> = split_words(keyword.as_ref())
                .iter()
                .map(|word| word.to_lowercase())
                .collect();
            if words.is_empty() {
                continue;
            }
            joined.insert(words.concat());
            if words.len() > 1 && !phrases.contains(&words) {
                phrases.push(words);
            }
        }

        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        Self { joined, phrases }
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }

    /// Whether a single word equals a keyword, ignoring case
    pub fn contains_token(&self, word: &str) -> bool {
        self.joined.contains(&word.to_lowercase())
    }

    /// Drop every word, or run of words, that spells out a keyword
    pub fn strip<'a>(&self, words: &'a [String]) -> Vec<&'a str> {
        let lowered: Vec<String> = words.iter().map(|word| word.to_lowercase()).collect();
        let mut kept = Vec::with_capacity(words.len());
        let mut i = 0;

        while i < words.len() {
            match self.match_at(&lowered, i) {
                Some(len) => i += len,
                None => {
                    kept.push(words[i].as_str());
                    i += 1;
                }
            }
        }
        kept
    }

    fn match_at(&self, lowered: &[String], start: usize) -> Option<usize> {
        let rest = &lowered[start..];
        self.phrases
            .iter()
            .find(|phrase| rest.starts_with(phrase.as_slice()))
            .map(Vec::len)
            .or_else(|| self.joined.contains(&rest[0]).then_some(1))
    }
}
