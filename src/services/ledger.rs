//! Budget ledger service
//!
//! Holds the month's income and expenses, validates every mutation, and keeps
//! the remote worksheet and the local JSON file in step with the in-memory
//! state. Store failures never abort a session: remote problems are logged
//! and reported, local file problems lead to the file being regenerated.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::display::format_summary;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{validate_income, Expense, Money};
use crate::remote::{expense_from_row, expense_to_row, RemoteStore, SheetLayout};
use crate::storage::{FileState, LedgerFile};

/// Whether a mutation reached the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// The remote store accepted the write
    Synced,
    /// The remote write failed; the change only exists locally
    LocalOnly { reason: String },
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }
}

/// What the remote store contributed during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteLoad {
    /// Income and rows were read; `skipped_rows` could not be parsed
    Loaded { skipped_rows: usize },
    /// The store could not be read; values fell back to defaults
    Unavailable { reason: String },
}

/// What happened to the local file during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalLoad {
    /// The file's contents replaced the remote values
    Loaded,
    /// No file existed; one was created from the current values
    Created,
    /// The file was unusable and has been rewritten from the current values
    Regenerated { reason: String },
}

/// Summary of a `Ledger::load` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub remote: RemoteLoad,
    pub local: LocalLoad,
}

/// In-memory record of the month's income and expenses
pub struct Ledger<R: RemoteStore> {
    remote: R,
    layout: SheetLayout,
    income: Money,
    expenses: Vec<Expense>,
}

impl<R: RemoteStore> Ledger<R> {
    /// Create an empty ledger bound to a remote store
    pub fn new(remote: R, layout: SheetLayout) -> Self {
        Self {
            remote,
            layout,
            income: Money::zero(),
            expenses: Vec::new(),
        }
    }

    /// Hydrate from the remote store, then let the local file override it
    ///
    /// Only fails when a missing or unusable local file cannot be rewritten.
    pub fn load(&mut self, file_path: &Path) -> LedgerResult<LoadReport> {
        let remote = self.load_remote();

        let local = match LedgerFile::open(file_path) {
            FileState::Loaded(file) => {
                info!(path = %file_path.display(), "Loaded local ledger file");
                self.income = file.income;
                self.expenses = file.expenses;
                LocalLoad::Loaded
            }
            FileState::Missing => {
                info!(path = %file_path.display(), "Local ledger file missing, creating it");
                self.save(file_path)?;
                LocalLoad::Created
            }
            FileState::Malformed(reason) => {
                warn!(path = %file_path.display(), %reason, "Local ledger file unusable, regenerating");
                self.save(file_path)?;
                LocalLoad::Regenerated { reason }
            }
        };

        Ok(LoadReport { remote, local })
    }

    fn load_remote(&mut self) -> RemoteLoad {
        self.income = match self.remote.read_cell(&self.layout.income_cell) {
            Ok(Some(text)) => match Money::parse(&text) {
                Ok(amount) if !amount.is_negative() => amount,
                Ok(_) | Err(_) => {
                    warn!(cell = %self.layout.income_cell, value = %text, "Income cell does not hold a valid amount, using zero");
                    Money::zero()
                }
            },
            Ok(None) => Money::zero(),
            Err(e) => {
                warn!(error = %e, "Could not read income from remote store, using zero");
                self.income = Money::zero();
                self.expenses.clear();
                return RemoteLoad::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        let rows = match self.remote.read_rows() {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "Could not read expenses from remote store");
                self.expenses.clear();
                return RemoteLoad::Unavailable {
                    reason: e.to_string(),
                };
            }
        };

        let mut skipped_rows = 0;
        let mut total = Money::zero();
        self.expenses = rows
            .iter()
            .filter_map(|row| match expense_from_row(row) {
                Ok(Some(expense)) => match total.checked_add(expense.amount) {
                    Some(sum) => {
                        total = sum;
                        Some(expense)
                    }
                    None => {
                        warn!(description = %expense.description, "Skipping expense row that overflows the total");
                        skipped_rows += 1;
                        None
                    }
                },
                Ok(None) => None,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable expense row");
                    skipped_rows += 1;
                    None
                }
            })
            .collect();

        debug!(
            income = %self.income,
            expenses = self.expenses.len(),
            skipped_rows,
            "Loaded ledger from remote store"
        );
        RemoteLoad::Loaded { skipped_rows }
    }

    /// Set the monthly income and write it to the remote income cell
    pub fn set_income(&mut self, amount: Money) -> LedgerResult<SyncStatus> {
        validate_income(amount).map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.income = amount;
        info!(income = %amount, "Income set");

        let result = self
            .remote
            .update_cell(&self.layout.income_cell, &amount.to_decimal_string());
        Ok(sync_status(result, "income"))
    }

    /// Record an expense and append it to the remote worksheet
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: Money,
        category: &str,
    ) -> LedgerResult<SyncStatus> {
        let expense = Expense::new(description, amount, category);
        expense
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;
        if self.total_expenses().checked_add(expense.amount).is_none() {
            return Err(LedgerError::Validation(
                "Expense would overflow the ledger total".to_string(),
            ));
        }

        let row = expense_to_row(&expense);
        info!(
            description = %expense.description,
            category = %expense.category,
            amount = %expense.amount,
            "Expense added"
        );
        self.expenses.push(expense);

        let result = self.remote.append_row(&row);
        Ok(sync_status(result, "expense"))
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses; negative when overspent
    pub fn remaining_balance(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Expense totals grouped by category, ordered by category name
    pub fn totals_by_category(&self) -> BTreeMap<String, Money> {
        let mut totals = BTreeMap::new();
        for expense in &self.expenses {
            *totals
                .entry(expense.category.clone())
                .or_insert_with(Money::zero) += expense.amount;
        }
        totals
    }

    /// Human-readable report of the ledger
    pub fn summary(&self) -> String {
        format_summary(self, "$")
    }

    /// Human-readable report using a specific currency symbol
    pub fn summary_with_symbol(&self, symbol: &str) -> String {
        format_summary(self, symbol)
    }

    /// Write the ledger to the local JSON file, replacing prior content
    pub fn save(&self, file_path: &Path) -> LedgerResult<()> {
        LedgerFile::new(self.income, self.expenses.clone()).write(file_path)?;
        debug!(path = %file_path.display(), "Saved local ledger file");
        Ok(())
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The injected remote store
    pub fn remote(&self) -> &R {
        &self.remote
    }
}

fn sync_status(result: LedgerResult<()>, what: &str) -> SyncStatus {
    match result {
        Ok(()) => SyncStatus::Synced,
        Err(e) => {
            warn!(error = %e, "Could not write {} to remote store; kept locally", what);
            SyncStatus::LocalOnly {
                reason: e.to_string(),
            }
        }
    }
}
