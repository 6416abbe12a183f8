//! A1-notation cell addresses

use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A single cell address such as `A2` or `AB17`
///
/// Rows and columns are 1-based, matching spreadsheet notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    row: u32,
    column: u32,
}

impl CellAddress {
    /// Create an address from 1-based row and column numbers
    pub fn new(row: u32, column: u32) -> Result<Self, LedgerError> {
        if row == 0 || column == 0 {
            return Err(LedgerError::Config(format!(
                "Cell row and column are 1-based (got row {}, column {})",
                row, column
            )));
        }
        Ok(Self { row, column })
    }

    /// Create an address from numbers known to be non-zero
    pub(crate) const fn new_unchecked(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Column letters for a 1-based column number (1 = A, 27 = AA)
    pub fn column_letters(column: u32) -> String {
        let mut n = column;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        letters.iter().rev().collect()
    }
}

impl FromStr for CellAddress {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::Config(format!("Invalid cell address: '{}'", s));
        let trimmed = s.trim();

        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(invalid)?;
        let (letters, digits) = trimmed.split_at(split);

        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let mut column: u32 = 0;
        for c in letters.chars() {
            let value = (c.to_ascii_uppercase() as u8 - b'A') as u32 + 1;
            column = column
                .checked_mul(26)
                .and_then(|col| col.checked_add(value))
                .ok_or_else(invalid)?;
        }

        let row: u32 = digits.parse().map_err(|_| invalid())?;
        Self::new(row, column).map_err(|_| invalid())
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_letters(self.column), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let cell: CellAddress = "A2".parse().unwrap();
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.column(), 1);
    }

    #[test]
    fn test_parse_multi_letter_and_lowercase() {
        let cell: CellAddress = "ab17".parse().unwrap();
        assert_eq!(cell.column(), 28);
        assert_eq!(cell.row(), 17);
        assert_eq!(cell.to_string(), "AB17");
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(CellAddress::column_letters(1), "A");
        assert_eq!(CellAddress::column_letters(26), "Z");
        assert_eq!(CellAddress::column_letters(27), "AA");
        assert_eq!(CellAddress::column_letters(702), "ZZ");
        assert_eq!(CellAddress::column_letters(703), "AAA");
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "A", "2", "A0", "2A", "A2B", "Ä2", "A-1"] {
            assert!(bad.parse::<CellAddress>().is_err(), "accepted {:?}", bad);
        }
    }
}
