use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::TransferAction;

/// Outcome recorded for one processed font file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventAction {
    Copied,
    Moved,
    Error,
}

impl From<TransferAction> for EventAction {
    fn from(action: TransferAction) -> Self {
        match action {
            TransferAction::Copy => EventAction::Copied,
            TransferAction::Move => EventAction::Moved,
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventAction::Copied => write!(f, "Copied"),
            EventAction::Moved => write!(f, "Moved"),
            EventAction::Error => write!(f, "Error"),
        }
    }
}

/// One record per processed file, success or failure
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEvent {
    pub timestamp: DateTime<Local>,
    pub action: EventAction,
    pub source_file: PathBuf,
    pub family: String,
    pub subfamily: String,
    /// Empty when the failure happened before a folder was chosen
    pub destination_folder: PathBuf,
    pub final_path: Option<PathBuf>,
    pub error_detail: Option<String>,
}

impl TransferEvent {
    pub fn is_error(&self) -> bool {
        self.action == EventAction::Error
    }
}
