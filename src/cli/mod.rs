//! Command-line interface handling and user interaction

mod args;
mod interaction;

pub use args::Args;
pub use interaction::{ask_action, ask_yes_no, prompt_source_dir};
