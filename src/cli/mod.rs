//! CLI command handlers
//!
//! This module contains the interactive session and the handlers for each
//! subcommand.

pub mod commands;
pub mod session;

pub use commands::{
    connect_remote, handle_config, handle_summary, handle_track, load_ledger, Commands,
};
pub use session::{run_session, DONE_SENTINEL};
