//! fontfold: sorts a tree of font files into one folder per family.
//!
//! Family names come from each font's `name` table, are stripped of
//! weight/style/width keywords, and become folder names. Collections go to a
//! shared folder. See [`organizer::Organizer`] for the processing pipeline.

pub mod cli;
pub mod error;
pub mod font;
pub mod models;
pub mod organizer;
pub mod utils;

pub use error::{Error, Result};
pub use font::{read_names, KeywordSet};
pub use models::{Config, ContainerKind, FontFile, NameRecord, NameSource, TransferAction, TransferEvent};
pub use organizer::{Organizer, PathDiscovery, RunSummary};
pub use utils::clean;
