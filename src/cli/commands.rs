//! Subcommand handlers
//!
//! Each handler receives a ledger whose remote store was built by the entry
//! point, loads it, and does its work.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use clap::Subcommand;
use tracing::{info, warn};

use super::session::run_session;
use crate::config::{LedgerPaths, Settings};
use crate::error::LedgerResult;
use crate::remote::{MemorySheet, RemoteStore, SheetsClient};
use crate::services::{Ledger, LocalLoad, RemoteLoad};

/// Top-level subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Enter income and expenses interactively, then print the summary (default)
    Track,

    /// Print the summary without prompting
    Summary,

    /// Show resolved paths and settings
    Config,
}

/// Build the remote store described by the settings
///
/// Falls back to an in-memory worksheet when running offline or when the
/// spreadsheet id or access token is missing.
pub fn connect_remote(settings: &Settings, offline: bool) -> LedgerResult<Box<dyn RemoteStore>> {
    if offline {
        info!("Offline mode, using in-memory worksheet");
        return Ok(Box::new(MemorySheet::new()));
    }

    let Some(spreadsheet_id) = settings.spreadsheet_id.as_deref() else {
        warn!("No spreadsheet_id configured, changes will only be saved locally");
        return Ok(Box::new(MemorySheet::new()));
    };

    let Some(token) = Settings::access_token() else {
        warn!(
            "{} is not set, changes will only be saved locally",
            crate::config::settings::ACCESS_TOKEN_ENV
        );
        return Ok(Box::new(MemorySheet::new()));
    };

    let client = SheetsClient::new(
        spreadsheet_id,
        &settings.worksheet,
        &token,
        Duration::from_secs(settings.remote_timeout_secs),
    )?;
    info!(spreadsheet_id, worksheet = %settings.worksheet, "Connected to spreadsheet");
    Ok(Box::new(client))
}

/// Load the ledger and tell the user about degraded sources
pub fn load_ledger<R: RemoteStore>(ledger: &mut Ledger<R>, file: &Path) -> LedgerResult<()> {
    let report = ledger.load(file)?;

    if let RemoteLoad::Unavailable { reason } = &report.remote {
        eprintln!("Could not reach the spreadsheet ({}); starting from local data.", reason);
    }
    match &report.local {
        LocalLoad::Created => eprintln!("Created {}", file.display()),
        LocalLoad::Regenerated { reason } => {
            eprintln!("Rebuilt {} ({})", file.display(), reason)
        }
        LocalLoad::Loaded => {}
    }
    Ok(())
}

/// Interactive session: prompt, print the summary, save
pub fn handle_track<R: RemoteStore>(
    ledger: &mut Ledger<R>,
    settings: &Settings,
    file: &Path,
) -> LedgerResult<()> {
    load_ledger(ledger, file)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(ledger, &mut input, &mut output, &settings.currency_symbol)?;

    writeln!(output)?;
    write!(output, "{}", ledger.summary_with_symbol(&settings.currency_symbol))?;
    ledger.save(file)?;
    info!(path = %file.display(), "Session saved");
    Ok(())
}

/// Print the summary only
pub fn handle_summary<R: RemoteStore>(
    ledger: &mut Ledger<R>,
    settings: &Settings,
    file: &Path,
) -> LedgerResult<()> {
    load_ledger(ledger, file)?;
    print!("{}", ledger.summary_with_symbol(&settings.currency_symbol));
    Ok(())
}

/// Print resolved paths and settings
pub fn handle_config(paths: &LedgerPaths, settings: &Settings, file: &Path) {
    println!("Budget Ledger Configuration");
    println!("===========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Ledger file:      {}", file.display());
    println!();
    println!("Settings:");
    println!(
        "  Spreadsheet:   {}",
        settings.spreadsheet_id.as_deref().unwrap_or("(not set)")
    );
    println!("  Worksheet:     {}", settings.worksheet);
    println!("  Income cell:   {}", settings.income_cell);
    println!("  Currency:      {}", settings.currency_symbol);
    println!("  Timeout:       {}s", settings.remote_timeout_secs);
    println!(
        "  Access token:  {}",
        if Settings::access_token().is_some() {
            "set"
        } else {
            "not set"
        }
    );
}
