use std::path::PathBuf;

use chrono::Local;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::event_log::EventSink;
use super::placement::{Claims, PlacementDecision, PlacementResolver};
use crate::error::{Error, Result};
use crate::font::{read_names, KeywordSet};
use crate::models::{Config, EventAction, FontFile, NameRecord, TransferEvent};
use crate::utils::{clean, ensure_directory_exists, styled_file_name, transfer_file};

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub scanned: usize,
    pub copied: usize,
    pub moved: usize,
    pub failed: usize,
}

impl RunSummary {
    fn count(&mut self, event: &TransferEvent) {
        self.scanned += 1;
        match event.action {
            EventAction::Copied => self.copied += 1,
            EventAction::Moved => self.moved += 1,
            EventAction::Error => self.failed += 1,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.copied + self.moved
    }
}

/// Runs the read → clean → place → transfer pipeline over a list of fonts
pub struct Organizer<'a> {
    config: &'a Config,
    keywords: &'a KeywordSet,
    resolver: PlacementResolver,
    sink: &'a mut dyn EventSink,
}

impl<'a> Organizer<'a> {
    pub fn new(
        config: &'a Config,
        keywords: &'a KeywordSet,
        destination_root: impl Into<PathBuf>,
        sink: &'a mut dyn EventSink,
    ) -> Self {
        Self {
            config,
            keywords,
            resolver: PlacementResolver::new(destination_root),
            sink,
        }
    }

    /// Organize `files` in the given order, emitting exactly one event per file.
    ///
    /// A failing file never stops the batch.
    pub fn run(&mut self, files: &[FontFile]) -> RunSummary {
        let names = self.read_all(files);
        let mut claims = Claims::new();
        let mut summary = RunSummary::default();
        let total = files.len();

        for (i, (file, names)) in files.iter().zip(names).enumerate() {
            let event = self.process(file, names, &mut claims);
            log_event(i + 1, total, &event);
            summary.count(&event);

            if let Err(e) = self.sink.record(&event) {
                warn!(error = %e, "Could not record event");
            }
        }

        if let Err(e) = self.sink.flush() {
            warn!(error = %e, "Could not flush event log");
        }
        summary
    }

    /// Metadata for every file, in input order
    fn read_all(&self, files: &[FontFile]) -> Vec<Result<Vec<NameRecord>>> {
        if self.config.parallel_reads {
            debug!(count = files.len(), "Reading font names in parallel");
            files.par_iter().map(read_names).collect()
        } else {
            files.iter().map(read_names).collect()
        }
    }

    fn process(
        &self,
        file: &FontFile,
        names: Result<Vec<NameRecord>>,
        claims: &mut Claims,
    ) -> TransferEvent {
        let records = match names {
            Ok(records) if !records.is_empty() => records,
            Ok(_) => {
                let e = Error::font_read(&file.path, "no names found");
                return self.failure(file, "", "", PathBuf::new(), e);
            }
            Err(e) => return self.failure(file, "", "", PathBuf::new(), e),
        };

        let primary = &records[0];
        let (family, subfamily) = describe_names(file, &records);
        let canonical = clean(&primary.family, self.keywords);
        let file_name = self.target_file_name(file, primary);

        debug!(
            path = %file.path.display(),
            raw = %primary.family,
            canonical = %canonical,
            "Family normalized"
        );

        let decision = match self.resolver.resolve(file, &canonical, &file_name, claims) {
            Ok(decision) => decision,
            Err(e) => {
                let folder = self.resolver.folder_for(file, &canonical);
                return self.failure(file, &family, &subfamily, folder, e);
            }
        };

        match self.deliver(file, &decision) {
            Ok(()) => TransferEvent {
                timestamp: Local::now(),
                action: self.config.action.into(),
                source_file: file.path.clone(),
                family,
                subfamily,
                final_path: Some(decision.final_path()),
                destination_folder: decision.destination_folder,
                error_detail: None,
            },
            Err(e) => self.failure(file, &family, &subfamily, decision.destination_folder, e),
        }
    }

    fn target_file_name(&self, file: &FontFile, primary: &NameRecord) -> String {
        if self.config.rename_files && !file.is_collection() {
            styled_file_name(&primary.family, &primary.subfamily, &file.extension())
        } else {
            file.file_name()
        }
    }

    /// Create the folder and copy/move the file; the source is untouched on failure
    fn deliver(&self, file: &FontFile, decision: &PlacementDecision) -> Result<()> {
        if decision.in_place {
            debug!(path = %file.path.display(), "Already in place");
            return Ok(());
        }
        ensure_directory_exists(&decision.destination_folder)?;
        transfer_file(&file.path, &decision.final_path(), self.config.action)
    }

    fn failure(
        &self,
        file: &FontFile,
        family: &str,
        subfamily: &str,
        destination_folder: PathBuf,
        error: Error,
    ) -> TransferEvent {
        TransferEvent {
            timestamp: Local::now(),
            action: EventAction::Error,
            source_file: file.path.clone(),
            family: family.to_string(),
            subfamily: subfamily.to_string(),
            destination_folder,
            final_path: None,
            error_detail: Some(error.to_string()),
        }
    }
}

/// Family and subfamily text for the event; collections list every distinct name
fn describe_names(file: &FontFile, records: &[NameRecord]) -> (String, String) {
    if !file.is_collection() || records.len() == 1 {
        return (records[0].family.clone(), records[0].subfamily.clone());
    }

    let mut families: Vec<&str> = Vec::new();
    let mut subfamilies: Vec<&str> = Vec::new();
    for record in records {
        if !families.contains(&record.family.as_str()) {
            families.push(&record.family);
        }
        if !subfamilies.contains(&record.subfamily.as_str()) {
            subfamilies.push(&record.subfamily);
        }
    }
    (families.join(", "), subfamilies.join(", "))
}

fn log_event(position: usize, total: usize, event: &TransferEvent) {
    let name = event
        .source_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match (&event.final_path, &event.error_detail) {
        (Some(final_path), _) => info!(
            "[{}/{}] {}: {} → {} in '{}'",
            position,
            total,
            event.action,
            name,
            final_path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
            event
                .destination_folder
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
        ),
        (None, detail) => warn!(
            "[{}/{}] Error processing {}: {}",
            position,
            total,
            name,
            detail.as_deref().unwrap_or("unknown error"),
        ),
    }
}
