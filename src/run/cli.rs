use anyhow::Result;
use chrono::NaiveDate;
use clap::CommandFactory;

use super::args::{Cli, Command};
use crate::ledger;
use crate::models::{BudgetStatus, Expense};
use crate::store::Storage;
use crate::util::{format_amount, format_currency, truncate};

pub(crate) fn as_cli<S: Storage>(command: Command, store: &mut S) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    for line in execute(command, store, today)? {
        println!("{line}");
    }
    Ok(())
}

/// Shown when no subcommand is given.
pub(crate) fn print_usage() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Run one command and return the lines to print. `today` dates new expenses.
pub(crate) fn execute<S: Storage>(
    command: Command,
    store: &mut S,
    today: NaiveDate,
) -> Result<Vec<String>> {
    match command {
        Command::Add(args) => {
            let expense =
                ledger::add_expense(store, args.description, args.amount, args.category, today)?;
            Ok(vec![format!(
                "Expense added successfully (ID: {})",
                expense.id
            )])
        }
        Command::List(args) => {
            let expenses = ledger::list_expenses(store, &args.to_filter())?;
            if expenses.is_empty() {
                return Ok(vec!["No expenses found.".into()]);
            }
            Ok(expense_table(&expenses))
        }
        Command::Summary(args) => {
            let filter = args.filter.to_filter();
            let total = ledger::summarize(store, &filter)?;
            let mut lines = vec![format!("Total expenses: {}", format_currency(total))];
            if args.by_category {
                let spending = ledger::spending_by_category(store, &filter)?;
                if !spending.is_empty() {
                    lines.push(String::new());
                    lines.push("Spending by Category:".into());
                    for (name, amount) in &spending {
                        lines.push(format!("  {name:<24} {}", format_currency(*amount)));
                    }
                }
            }
            Ok(lines)
        }
        Command::SetBudget(args) => {
            let budget = ledger::set_budget(store, args.amount)?;
            Ok(vec![format!(
                "Budget set to {}",
                format_currency(budget.limit_amount)
            )])
        }
        Command::CheckBudget => {
            let line = match ledger::check_budget(store)? {
                BudgetStatus::Exceeded { by } => format!(
                    "Warning: You have exceeded your budget by {}",
                    format_currency(by)
                ),
                BudgetStatus::Within { remaining } => format!(
                    "You are within your budget. Remaining budget: {}",
                    format_currency(remaining)
                ),
            };
            Ok(vec![line])
        }
        Command::Delete(args) => {
            let line = match ledger::delete_expense(store, args.id)? {
                Some(_) => format!("Expense with ID {} deleted successfully.", args.id),
                None => format!("Expense with ID {} not found.", args.id),
            };
            Ok(vec![line])
        }
        Command::Export(args) => {
            let expenses = ledger::list_expenses(store, &args.filter.to_filter())?;
            if expenses.is_empty() {
                return Ok(vec!["No expenses to export".into()]);
            }
            let count = crate::export::export_to_csv(&args.path, &expenses)?;
            Ok(vec![format!(
                "Exported {count} expenses to {}",
                args.path.display()
            )])
        }
    }
}

/// Fixed-width listing: ID, Date, Description, Amount, Category.
pub(crate) fn expense_table(expenses: &[Expense]) -> Vec<String> {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(format!(
        "{:<5}{:<12}{:<20}{:<10}{}",
        "ID", "Date", "Description", "Amount", "Category"
    ));
    for e in expenses {
        lines.push(format!(
            "{:<5}{:<12}{:<20}{:<10}{}",
            e.id,
            e.date.format("%Y-%m-%d").to_string(),
            truncate(&e.description, 19),
            format_amount(e.amount),
            e.category,
        ));
    }
    lines
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
