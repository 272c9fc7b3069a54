use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::TransferAction;

/// Ask for the folder containing the font files
pub fn prompt_source_dir() -> Result<PathBuf> {
    let answer = prompt("Enter the full path to your fonts folder: ")?;
    let path = PathBuf::from(answer.trim());

    if !path.is_dir() {
        return Err(Error::InvalidPath(path));
    }
    Ok(path)
}

/// Ask whether to copy or move
pub fn ask_action() -> Result<TransferAction> {
    let answer = prompt("Do you want to (c)opy or (m)ove the fonts? ")?;
    parse_action(&answer)
        .ok_or_else(|| Error::Config(format!("invalid choice '{}'", answer.trim())))
}

/// Ask a y/n question
pub fn ask_yes_no(question: &str) -> Result<bool> {
    let answer = prompt(&format!("{} (y/n) ", question))?;
    parse_yes_no(&answer)
        .ok_or_else(|| Error::Config(format!("invalid choice '{}'", answer.trim())))
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input)
}

fn parse_action(answer: &str) -> Option<TransferAction> {
    match answer.trim().to_lowercase().as_str() {
        "c" | "copy" => Some(TransferAction::Copy),
        "m" | "move" => Some(TransferAction::Move),
        _ => None,
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
