//! Ledger summary formatting
//!
//! Renders income, the expense list, per-category totals, total expenses and
//! the remaining balance as plain text.

use chrono::Local;

use super::report::{double_separator, label_value, separator, truncate};
use crate::models::Money;
use crate::remote::RemoteStore;
use crate::services::Ledger;

const WIDTH: usize = 52;
const DESCRIPTION_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 14;

/// Format the full summary for a ledger
pub fn format_summary<R: RemoteStore>(ledger: &Ledger<R>, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    let title = format!("Budget Summary - {}", Local::now().format("%B %Y"));
    output.push_str(&format!("{}\n{}\n", title, double_separator(WIDTH)));
    output.push_str(&label_value("Monthly Income:", &money(ledger.income()), WIDTH));
    output.push_str("\n\n");

    if ledger.expenses().is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        let amount_width = WIDTH - DESCRIPTION_WIDTH - CATEGORY_WIDTH - 4;
        output.push_str(&format!(
            "{:<dw$}  {:<cw$}  {:>aw$}\n",
            "Description",
            "Category",
            "Amount",
            dw = DESCRIPTION_WIDTH,
            cw = CATEGORY_WIDTH,
            aw = amount_width,
        ));
        output.push_str(&format!(
            "{:-<dw$}  {:-<cw$}  {:->aw$}\n",
            "",
            "",
            "",
            dw = DESCRIPTION_WIDTH,
            cw = CATEGORY_WIDTH,
            aw = amount_width,
        ));

        for expense in ledger.expenses() {
            let category = if expense.category.is_empty() {
                "-"
            } else {
                expense.category.as_str()
            };
            output.push_str(&format!(
                "{:<dw$}  {:<cw$}  {:>aw$}\n",
                truncate(&expense.description, DESCRIPTION_WIDTH),
                truncate(category, CATEGORY_WIDTH),
                money(expense.amount),
                dw = DESCRIPTION_WIDTH,
                cw = CATEGORY_WIDTH,
                aw = amount_width,
            ));
        }

        let by_category = ledger.totals_by_category();
        if by_category.len() > 1 {
            output.push_str("\nBy Category\n");
            for (category, total) in &by_category {
                let name = if category.is_empty() { "-" } else { category.as_str() };
                output.push_str(&label_value(&format!("  {}", name), &money(*total), WIDTH));
                output.push('\n');
            }
        }
    }

    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&label_value("Total Expenses:", &money(ledger.total_expenses()), WIDTH));
    output.push('\n');

    let remaining = ledger.remaining_balance();
    output.push_str(&label_value("Remaining Balance:", &money(remaining), WIDTH));
    output.push('\n');
    if remaining.is_negative() {
        output.push_str(&format!("Over budget by {}\n", money(remaining.abs())));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MemorySheet, SheetLayout};

    fn scenario() -> Ledger<MemorySheet> {
        let mut ledger = Ledger::new(MemorySheet::new(), SheetLayout::default());
        ledger.set_income(Money::from_dollars(1000)).unwrap();
        ledger
            .add_expense("Rent", Money::from_dollars(400), "Housing")
            .unwrap();
        ledger
            .add_expense("Food", Money::from_dollars(150), "Groceries")
            .unwrap();
        ledger
    }

    #[test]
    fn test_summary_lists_everything() {
        let text = format_summary(&scenario(), "$");

        assert!(text.contains("Monthly Income:"));
        assert!(text.contains("$1000.00"));
        assert!(text.contains("Rent"));
        assert!(text.contains("Housing"));
        assert!(text.contains("$400.00"));
        assert!(text.contains("Food"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("$150.00"));
        assert!(text.contains("By Category"));

        let total_line = text.lines().find(|l| l.starts_with("Total Expenses:")).unwrap();
        assert!(total_line.ends_with("$550.00"));
        let remaining_line = text
            .lines()
            .find(|l| l.starts_with("Remaining Balance:"))
            .unwrap();
        assert!(remaining_line.ends_with("$450.00"));
        assert!(!text.contains("Over budget"));
    }

    #[test]
    fn test_summary_empty_ledger() {
        let ledger = Ledger::new(MemorySheet::new(), SheetLayout::default());
        let text = format_summary(&ledger, "€");

        assert!(text.contains("No expenses recorded."));
        assert!(text.contains("€0.00"));
    }

    #[test]
    fn test_summary_over_budget() {
        let mut ledger = Ledger::new(MemorySheet::new(), SheetLayout::default());
        ledger.set_income(Money::from_dollars(100)).unwrap();
        ledger
            .add_expense("Laptop", Money::from_dollars(900), "")
            .unwrap();

        let text = format_summary(&ledger, "$");
        assert!(text.contains("-$800.00"));
        assert!(text.contains("Over budget by $800.00"));
        assert!(!text.contains("By Category"));
    }
}
