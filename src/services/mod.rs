//! Business logic layer
//!
//! The ledger service owns the session's income and expenses and coordinates
//! the remote and local stores.

pub mod ledger;

pub use ledger::{Ledger, LoadReport, LocalLoad, RemoteLoad, SyncStatus};
