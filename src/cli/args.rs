use std::path::PathBuf;

use clap::Parser;

use crate::models::{Config, TransferAction};

/// Sort font files into one folder per family
#[derive(Debug, Parser)]
#[command(name = "fontfold", version, about, long_about = None)]
pub struct Args {
    /// Folder containing the font files; prompted for when omitted
    pub source: Option<PathBuf>,

    /// Copy or move fonts into their family folders
    #[arg(short, long, value_enum, default_value_t = TransferAction::Copy)]
    pub action: TransferAction,

    /// Write a CSV log of every processed file
    #[arg(short, long)]
    pub log: bool,

    /// CSV log location (implies --log); defaults to FontSortLog.csv in the source folder
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Ask for action, logging and renaming interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Keyword file, one style/weight/width keyword per line
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Create family folders here instead of in the source folder
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Rename fonts to "Family Subfamily.ext"
    #[arg(short, long)]
    pub rename: bool,

    /// Read font metadata on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Options that don't depend on the source folder
    pub fn to_config(&self) -> Config {
        Config {
            debug_mode: self.debug,
            action: self.action,
            output_root: self.output.clone(),
            keywords_path: self.keywords.clone(),
            log_file: self.log_file.clone(),
            rename_files: self.rename,
            parallel_reads: self.parallel,
        }
    }
}
