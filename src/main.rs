use anyhow::{Context, Result};
use clap::Parser;

use fontfold::cli::{ask_action, ask_yes_no, prompt_source_dir, Args};
use fontfold::organizer::{CsvLog, FontDiscovery, Organizer, PathDiscovery, LOG_FILE_NAME};
use fontfold::utils::init_logging;
use fontfold::{Error, KeywordSet};

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = args.to_config();
    init_logging(config.debug_mode);

    let source = match &args.source {
        Some(path) => path.clone(),
        None => prompt_source_dir()?,
    };
    if !source.is_dir() {
        return Err(Error::InvalidPath(source).into());
    }

    if args.interactive {
        config.action = ask_action()?;
        if ask_yes_no("Do you want to create a CSV log?")? && config.log_file.is_none() {
            config.log_file = Some(source.join(LOG_FILE_NAME));
        }
        config.rename_files = ask_yes_no("Do you want to rename fonts based on their metadata?")?;
    } else if args.log && config.log_file.is_none() {
        config.log_file = Some(source.join(LOG_FILE_NAME));
    }

    let keywords = KeywordSet::load(config.keywords_path.as_deref());
    let files = PathDiscovery::new(&source)
        .discover()
        .with_context(|| format!("scanning {}", source.display()))?;

    let mut log = match &config.log_file {
        Some(path) => Some(
            CsvLog::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?,
        ),
        None => None,
    };

    let destination_root = config.destination_root(&source).to_path_buf();
    let summary = Organizer::new(&config, &keywords, destination_root, &mut log).run(&files);

    println!("\n--------------------");
    println!("Processing Complete.");
    println!("Total files scanned:    {}", summary.scanned);
    println!("  Copied:               {}", summary.copied);
    println!("  Moved:                {}", summary.moved);
    println!("  Failed:               {}", summary.failed);

    if let Some(path) = &config.log_file {
        println!("\nLog file saved at: {}", path.display());
    }

    Ok(())
}
