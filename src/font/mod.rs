//! Font name extraction and keyword handling

pub mod encoding;
pub mod keywords;
pub mod metadata;

pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use metadata::{read_names, DEFAULT_SUBFAMILY};
