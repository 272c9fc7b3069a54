//! Font organization: discovery, placement, transfer and event logging

pub mod discovery;
pub mod event_log;
pub mod placement;
pub mod processor;

pub use discovery::{FontDiscovery, PathDiscovery};
pub use event_log::{CsvLog, EventSink, LOG_FILE_NAME};
pub use placement::{Claims, PlacementDecision, PlacementResolver, COLLECTION_FOLDER};
pub use processor::{Organizer, RunSummary};
