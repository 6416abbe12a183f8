//! Local storage layer
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod ledger_file;

pub use file_io::{read_json, write_json_atomic};
pub use ledger_file::{FileState, LedgerFile};
