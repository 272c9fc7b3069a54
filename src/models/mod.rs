//! Data types shared by the reader, the resolver and the organizer

mod config;
mod event;
mod font;

pub use config::{Config, TransferAction};
pub use event::{EventAction, TransferEvent};
pub use font::{ContainerKind, FontFile, NameRecord, NameSource};
