//! Core data models for the budget ledger
//!
//! Money amounts and the expenses recorded against the monthly income.

pub mod expense;
pub mod money;

pub use expense::{
    validate_income, Expense, ExpenseValidationError, IncomeValidationError,
};
pub use money::{Money, MoneyParseError};
