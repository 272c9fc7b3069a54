pub mod file;
pub mod logging;
pub mod naming;

pub use file::{ensure_directory_exists, safe_move_file, transfer_file};
pub use logging::init_logging;
pub use naming::{clean, sanitize_segment, styled_file_name, UNKNOWN_FAMILY};
