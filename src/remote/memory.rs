//! In-process worksheet
//!
//! Backs `--offline` sessions and tests. Can be switched to an unavailable
//! state in which every call fails like an unreachable service.

use tracing::debug;

use super::{CellAddress, RemoteStore, FIRST_DATA_ROW, HEADER_ROW};
use crate::error::{LedgerError, LedgerResult};

/// Worksheet kept in memory as a ragged grid of rows
#[derive(Debug, Clone)]
pub struct MemorySheet {
    rows: Vec<Vec<String>>,
    available: bool,
}

impl Default for MemorySheet {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySheet {
    /// Create a worksheet holding only the header row
    pub fn new() -> Self {
        Self {
            rows: vec![HEADER_ROW.iter().map(|s| s.to_string()).collect()],
            available: true,
        }
    }

    /// Create a worksheet that fails every call
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Toggle availability
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Current value of a cell, bypassing availability (for inspection)
    pub fn cell(&self, cell: &CellAddress) -> Option<&str> {
        self.rows
            .get(cell.row() as usize - 1)
            .and_then(|row| row.get(cell.column() as usize - 1))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// All rows including the header, bypassing availability (for inspection)
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn ensure_available(&self) -> LedgerResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(LedgerError::Remote("Worksheet is unavailable".into()))
        }
    }

    fn last_used_row(&self) -> usize {
        self.rows
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl RemoteStore for MemorySheet {
    fn read_cell(&self, cell: &CellAddress) -> LedgerResult<Option<String>> {
        self.ensure_available()?;
        Ok(self.cell(cell).map(str::to_string))
    }

    fn read_rows(&self) -> LedgerResult<Vec<Vec<String>>> {
        self.ensure_available()?;
        Ok(self
            .rows
            .iter()
            .skip(FIRST_DATA_ROW as usize - 1)
            .cloned()
            .collect())
    }

    fn update_cell(&mut self, cell: &CellAddress, value: &str) -> LedgerResult<()> {
        self.ensure_available()?;

        let row_index = cell.row() as usize - 1;
        let col_index = cell.column() as usize - 1;

        if self.rows.len() <= row_index {
            self.rows.resize_with(row_index + 1, Vec::new);
        }
        let row = &mut self.rows[row_index];
        if row.len() <= col_index {
            row.resize(col_index + 1, String::new());
        }
        row[col_index] = value.to_string();

        debug!(cell = %cell, value, "Updated in-memory cell");
        Ok(())
    }

    fn append_row(&mut self, row: &[String]) -> LedgerResult<()> {
        self.ensure_available()?;

        let insert_at = self.last_used_row();
        self.rows.truncate(insert_at);
        self.rows.push(row.to_vec());

        debug!(row = insert_at + 1, "Appended in-memory row");
        Ok(())
    }
}
