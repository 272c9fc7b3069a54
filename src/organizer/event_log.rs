//! Destinations for per-file transfer events

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::{EventAction, TransferEvent};

/// Default CSV log name, created in the source folder
pub const LOG_FILE_NAME: &str = "FontSortLog.csv";

const HEADERS: [&str; 8] = [
    "Timestamp",
    "Action",
    "FontFile",
    "Family",
    "Subfamily",
    "DestinationFolder",
    "FinalPath",
    "Details",
];

/// Receives one event per processed file
pub trait EventSink {
    fn record(&mut self, event: &TransferEvent) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Collects events in memory
impl EventSink for Vec<TransferEvent> {
    fn record(&mut self, event: &TransferEvent) -> Result<()> {
        self.push(event.clone());
        Ok(())
    }
}

/// An absent sink drops events
impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, event: &TransferEvent) -> Result<()> {
        match self {
            Some(sink) => sink.record(event),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }
}

#[derive(Serialize)]
struct LogRow<'a> {
    timestamp: String,
    action: EventAction,
    font_file: String,
    family: &'a str,
    subfamily: &'a str,
    destination_folder: String,
    final_path: String,
    details: &'a str,
}

impl<'a> From<&'a TransferEvent> for LogRow<'a> {
    fn from(event: &'a TransferEvent) -> Self {
        Self {
            timestamp: event.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            action: event.action,
            font_file: event.source_file.display().to_string(),
            family: &event.family,
            subfamily: &event.subfamily,
            destination_folder: event.destination_folder.display().to_string(),
            final_path: event
                .final_path
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default(),
            details: event.error_detail.as_deref().unwrap_or_default(),
        }
    }
}

/// CSV event log
pub struct CsvLog<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvLog<File> {
    /// Create (or truncate) a log file and write the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvLog<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(HEADERS)?;
        Ok(Self { writer })
    }
}

impl<W: Write> EventSink for CsvLog<W> {
    fn record(&mut self, event: &TransferEvent) -> Result<()> {
        self.writer.serialize(LogRow::from(event))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn event(action: EventAction) -> TransferEvent {
        TransferEvent {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            action,
            source_file: PathBuf::from("in/Arial-Bold.ttf"),
            family: "Arial".to_string(),
            subfamily: "Bold".to_string(),
            destination_folder: PathBuf::from("out/Arial"),
            final_path: (action != EventAction::Error).then(|| PathBuf::from("out/Arial/Arial-Bold.ttf")),
            error_detail: (action == EventAction::Error).then(|| "disk full, retry".to_string()),
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join(LOG_FILE_NAME);

        let mut log = CsvLog::create(&path).expect("create log");
        log.record(&event(EventAction::Copied)).expect("record");
        log.record(&event(EventAction::Error)).expect("record");
        log.flush().expect("flush");

        let content = fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "Timestamp,Action,FontFile,Family,Subfamily,DestinationFolder,FinalPath,Details"
        );
        assert_eq!(
            lines[1],
            "2024-05-01 12:30:00,Copied,in/Arial-Bold.ttf,Arial,Bold,out/Arial,out/Arial/Arial-Bold.ttf,"
        );
        assert_eq!(
            lines[2],
            "2024-05-01 12:30:00,Error,in/Arial-Bold.ttf,Arial,Bold,out/Arial,,\"disk full, retry\""
        );
    }

    #[test]
    fn optional_sink_forwards_or_drops() {
        let mut none: Option<Vec<TransferEvent>> = None;
        none.record(&event(EventAction::Moved)).expect("record");

        let mut some = Some(Vec::new());
        some.record(&event(EventAction::Moved)).expect("record");
        assert_eq!(some.map(|events| events.len()), Some(1));
    }
}
