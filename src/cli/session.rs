//! Interactive tracking session
//!
//! Prompts for the monthly income, then for expenses until the user types
//! `done`. Invalid input is reported and the same question is asked again.
//! End of input ends the session as if `done` had been entered.

use std::io::{BufRead, Write};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::remote::RemoteStore;
use crate::services::{Ledger, SyncStatus};

/// Input that ends the expense loop
pub const DONE_SENTINEL: &str = "done";

/// Drive one interactive session against `ledger`
pub fn run_session<R, I, O>(
    ledger: &mut Ledger<R>,
    input: &mut I,
    output: &mut O,
    symbol: &str,
) -> LedgerResult<()>
where
    R: RemoteStore,
    I: BufRead,
    O: Write,
{
    if prompt_income(ledger, input, output, symbol)? {
        prompt_expenses(ledger, input, output)?;
    }
    Ok(())
}

/// Returns false when input ran out
fn prompt_income<R, I, O>(
    ledger: &mut Ledger<R>,
    input: &mut I,
    output: &mut O,
    symbol: &str,
) -> LedgerResult<bool>
where
    R: RemoteStore,
    I: BufRead,
    O: Write,
{
    let current = ledger.income().format_with_symbol(symbol);

    loop {
        let Some(line) = ask(
            input,
            output,
            &format!("Enter your monthly income (blank keeps {}): ", current),
        )?
        else {
            return Ok(false);
        };

        if line.is_empty() {
            return Ok(true);
        }

        let amount = match Money::parse(&line) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(output, "Please enter a number, e.g. 2500 or 2500.00.")?;
                continue;
            }
        };

        match ledger.set_income(amount) {
            Ok(status) => {
                report_sync(output, &status, "Income")?;
                return Ok(true);
            }
            Err(LedgerError::Validation(msg)) => {
                writeln!(output, "{}", msg)?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn prompt_expenses<R, I, O>(ledger: &mut Ledger<R>, input: &mut I, output: &mut O) -> LedgerResult<()>
where
    R: RemoteStore,
    I: BufRead,
    O: Write,
{
    loop {
        let prompt = format!("Expense description (or '{}' to finish): ", DONE_SENTINEL);
        let Some(description) = ask(input, output, &prompt)? else {
            return Ok(());
        };

        if description.eq_ignore_ascii_case(DONE_SENTINEL) {
            return Ok(());
        }
        if description.is_empty() {
            writeln!(output, "Description cannot be empty.")?;
            continue;
        }

        let Some(category) = ask(input, output, "Category: ")? else {
            return Ok(());
        };

        loop {
            let Some(line) = ask(input, output, "Amount: ")? else {
                return Ok(());
            };

            let amount = match Money::parse(&line) {
                Ok(amount) => amount,
                Err(_) => {
                    writeln!(output, "Please enter a number, e.g. 12.50.")?;
                    continue;
                }
            };

            match ledger.add_expense(&description, amount, &category) {
                Ok(status) => {
                    report_sync(output, &status, "Expense")?;
                    break;
                }
                Err(LedgerError::Validation(msg)) => {
                    writeln!(output, "{}", msg)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn ask<I: BufRead, O: Write>(input: &mut I, output: &mut O, prompt: &str) -> LedgerResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report_sync<O: Write>(output: &mut O, status: &SyncStatus, what: &str) -> LedgerResult<()> {
    if let SyncStatus::LocalOnly { reason } = status {
        writeln!(
            output,
            "{} recorded locally; spreadsheet update failed ({}).",
            what, reason
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{MemorySheet, SheetLayout};
    use std::io::Cursor;

    fn run(script: &str, ledger: &mut Ledger<MemorySheet>) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(ledger, &mut input, &mut output, "$").unwrap();
        String::from_utf8(output).unwrap()
    }

    fn ledger() -> Ledger<MemorySheet> {
        Ledger::new(MemorySheet::new(), SheetLayout::default())
    }

    #[test]
    fn test_full_session() {
        let mut ledger = ledger();
        run(
            "1000\nRent\nHousing\n400\nFood\nGroceries\n150\ndone\n",
            &mut ledger,
        );

        assert_eq!(ledger.income(), Money::from_dollars(1000));
        assert_eq!(ledger.expenses().len(), 2);
        assert_eq!(ledger.remaining_balance(), Money::from_dollars(450));
    }

    #[test]
    fn test_negative_income_reprompts() {
        let mut ledger = ledger();
        let out = run("-1\nabc\n800\nDONE\n", &mut ledger);

        assert!(out.contains("Income cannot be negative"));
        assert!(out.contains("Please enter a number"));
        assert_eq!(ledger.income(), Money::from_dollars(800));
    }

    #[test]
    fn test_negative_amount_reprompts_amount_only() {
        let mut ledger = ledger();
        let out = run("500\nFood\nGroceries\n-5\n25\ndone\n", &mut ledger);

        assert!(out.contains("Expense amount cannot be negative"));
        assert_eq!(ledger.expenses().len(), 1);
        assert_eq!(ledger.expenses()[0].amount, Money::from_dollars(25));
        assert_eq!(ledger.expenses()[0].category, "Groceries");
    }

    #[test]
    fn test_blank_income_keeps_loaded_value() {
        let mut ledger = ledger();
        ledger.set_income(Money::from_dollars(1200)).unwrap();
        let out = run("\ndone\n", &mut ledger);

        assert!(out.contains("blank keeps $1200.00"));
        assert_eq!(ledger.income(), Money::from_dollars(1200));
    }

    #[test]
    fn test_end_of_input_finishes() {
        let mut ledger = ledger();
        run("300\nTaxi\n", &mut ledger);

        assert_eq!(ledger.income(), Money::from_dollars(300));
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_remote_failure_is_reported() {
        let mut ledger = Ledger::new(MemorySheet::unavailable(), SheetLayout::default());
        let out = run("100\ndone\n", &mut ledger);

        assert!(out.contains("Income recorded locally"));
        assert_eq!(ledger.income(), Money::from_dollars(100));
    }
}
