//! Budget Ledger - monthly income and expense tracking from the command line
//!
//! Records a monthly income and a list of categorized expenses, mirrors them
//! to a spreadsheet and a local JSON file, and reports the remaining balance.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money and expenses
//! - `storage`: Local JSON file store
//! - `remote`: Spreadsheet store (Google Sheets or in-memory)
//! - `services`: The ledger itself
//! - `display`: Summary formatting
//! - `cli`: Interactive session and subcommand handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_ledger::models::Money;
//! use budget_ledger::remote::{MemorySheet, SheetLayout};
//! use budget_ledger::services::Ledger;
//!
//! let mut ledger = Ledger::new(MemorySheet::new(), SheetLayout::default());
//! ledger.load(std::path::Path::new("budget.json"))?;
//! ledger.set_income(Money::from_dollars(1000))?;
//! ledger.add_expense("Rent", Money::from_dollars(400), "Housing")?;
//! println!("{}", ledger.summary());
//! # Ok::<(), budget_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod remote;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
