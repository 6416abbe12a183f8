//! Remote tabular store
//!
//! The budget worksheet keeps a header row, the monthly income in a single
//! designated cell, and one row per expense:
//!
//! | A      | B           | C      | D        |
//! |--------|-------------|--------|----------|
//! | Income | Description | Amount | Category |
//! | 1000   | Rent        | 400    | Housing  |
//! |        | Food        | 150    | Groceries|
//!
//! Column A of expense rows is left blank.

pub mod cell;
pub mod memory;
pub mod sheets;

pub use cell::CellAddress;
pub use memory::MemorySheet;
pub use sheets::SheetsClient;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Money};

/// Header row written to a fresh worksheet
pub const HEADER_ROW: [&str; 4] = ["Income", "Description", "Amount", "Category"];

/// First row holding expense data (1-based)
pub const FIRST_DATA_ROW: u32 = 2;

/// Number of columns making up an expense row
pub const ROW_WIDTH: u32 = 4;

const DESCRIPTION_COL: usize = 1;
const AMOUNT_COL: usize = 2;
const CATEGORY_COL: usize = 3;

/// Capability to read and write the budget worksheet
pub trait RemoteStore {
    /// Read a single cell; `None` when the cell is empty
    fn read_cell(&self, cell: &CellAddress) -> LedgerResult<Option<String>>;

    /// Read all data rows below the header, columns A through D
    ///
    /// Rows may be ragged: trailing empty cells are not guaranteed to be present.
    fn read_rows(&self) -> LedgerResult<Vec<Vec<String>>>;

    /// Overwrite a single cell
    fn update_cell(&mut self, cell: &CellAddress, value: &str) -> LedgerResult<()>;

    /// Append a row after the last data row
    fn append_row(&mut self, row: &[String]) -> LedgerResult<()>;
}

impl<R: RemoteStore + ?Sized> RemoteStore for Box<R> {
    fn read_cell(&self, cell: &CellAddress) -> LedgerResult<Option<String>> {
        (**self).read_cell(cell)
    }

    fn read_rows(&self) -> LedgerResult<Vec<Vec<String>>> {
        (**self).read_rows()
    }

    fn update_cell(&mut self, cell: &CellAddress, value: &str) -> LedgerResult<()> {
        (**self).update_cell(cell, value)
    }

    fn append_row(&mut self, row: &[String]) -> LedgerResult<()> {
        (**self).append_row(row)
    }
}

/// Where the ledger lives inside the worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub income_cell: CellAddress,
}

impl SheetLayout {
    pub fn new(income_cell: CellAddress) -> Self {
        Self { income_cell }
    }

    /// Build a layout from a configured A1 address
    pub fn from_income_cell(address: &str) -> LedgerResult<Self> {
        Ok(Self::new(address.parse()?))
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            income_cell: CellAddress::new_unchecked(FIRST_DATA_ROW, 1),
        }
    }
}

/// Convert an expense into its worksheet row
pub fn expense_to_row(expense: &Expense) -> Vec<String> {
    vec![
        String::new(),
        expense.description.clone(),
        expense.amount.to_decimal_string(),
        expense.category.clone(),
    ]
}

/// Convert a worksheet row into an expense
///
/// Returns `Ok(None)` for rows without a description (blank rows, the
/// income-only row of an empty ledger).
pub fn expense_from_row(row: &[String]) -> LedgerResult<Option<Expense>> {
    let cell = |index: usize| row.get(index).map(|s| s.trim()).unwrap_or("");

    let description = cell(DESCRIPTION_COL);
    if description.is_empty() {
        return Ok(None);
    }

    let amount = Money::parse(cell(AMOUNT_COL)).map_err(|e| {
        LedgerError::Validation(format!("Row '{}' has an invalid amount: {}", description, e))
    })?;

    let expense = Expense::new(description, amount, cell(CATEGORY_COL));
    expense
        .validate()
        .map_err(|e| LedgerError::Validation(format!("Row '{}': {}", description, e)))?;

    Ok(Some(expense))
}
