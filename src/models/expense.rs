//! Expense model
//!
//! A single categorized outflow recorded against the month's income.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub description: String,
    pub amount: Money,
    #[serde(default)]
    pub category: String,
}

impl Expense {
    /// Create a new expense, trimming surrounding whitespace from the text fields
    pub fn new(description: impl Into<String>, amount: Money, category: impl Into<String>) -> Self {
        Self {
            description: description.into().trim().to_string(),
            amount,
            category: category.into().trim().to_string(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }
}

/// Validate a monthly income figure
pub fn validate_income(income: Money) -> Result<(), IncomeValidationError> {
    if income.is_negative() {
        return Err(IncomeValidationError::NegativeAmount);
    }
    Ok(())
}

/// Validation errors for income
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let expense = Expense::new("  Rent ", Money::from_dollars(400), " Housing\n");
        assert_eq!(expense.description, "Rent");
        assert_eq!(expense.category, "Housing");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_amount() {
        let expense = Expense::new("Refund?", Money::from_dollars(-5), "Misc");
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_validation_empty_description() {
        let expense = Expense::new("   ", Money::from_dollars(5), "Misc");
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_zero_amount_is_valid() {
        let expense = Expense::new("Free sample", Money::zero(), "");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_validate_income() {
        assert!(validate_income(Money::zero()).is_ok());
        assert!(validate_income(Money::from_dollars(1000)).is_ok());
        assert_eq!(
            validate_income(Money::from_cents(-1)),
            Err(IncomeValidationError::NegativeAmount)
        );
    }

    #[test]
    fn test_serialization_shape() {
        let expense = Expense::new("Food", Money::from_dollars(150), "Groceries");
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"description": "Food", "amount": 150, "category": "Groceries"})
        );

        let missing_category: Expense =
            serde_json::from_str(r#"{"description": "Bus", "amount": 2.5}"#).unwrap();
        assert_eq!(missing_category.category, "");
        assert_eq!(missing_category.amount.cents(), 250);
    }
}
