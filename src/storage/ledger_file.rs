//! Local JSON file store
//!
//! The document shape is `{ "income": number, "expenses": [...] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, write_json_atomic};
use crate::error::LedgerResult;
use crate::models::{validate_income, Expense, Money};

/// Contents of the local ledger file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFile {
    #[serde(default)]
    pub income: Money,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

/// Outcome of opening the local file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// File exists and holds a valid ledger
    Loaded(LedgerFile),
    /// No file at the path
    Missing,
    /// File exists but cannot be used; carries the reason
    Malformed(String),
}

impl LedgerFile {
    pub fn new(income: Money, expenses: Vec<Expense>) -> Self {
        Self { income, expenses }
    }

    /// Open and validate the file at `path`
    ///
    /// Never fails: unreadable or invalid content is reported as `Malformed`.
    pub fn open(path: &Path) -> FileState {
        let file: LedgerFile = match read_json(path) {
            Ok(Some(file)) => file,
            Ok(None) => return FileState::Missing,
            Err(e) => return FileState::Malformed(e.to_string()),
        };

        match file.validate() {
            Ok(()) => FileState::Loaded(file),
            Err(reason) => FileState::Malformed(reason),
        }
    }

    /// Write the file, replacing prior content
    pub fn write(&self, path: &Path) -> LedgerResult<()> {
        write_json_atomic(path, self)
    }

    fn validate(&self) -> Result<(), String> {
        validate_income(self.income).map_err(|e| e.to_string())?;
        let mut total = Money::zero();
        for (index, expense) in self.expenses.iter().enumerate() {
            expense
                .validate()
                .map_err(|e| format!("expense #{}: {}", index + 1, e))?;
            total = total
                .checked_add(expense.amount)
                .ok_or_else(|| format!("expense #{}: total overflows", index + 1))?;
        }
        Ok(())
    }
}
