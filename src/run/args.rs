use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::models::ExpenseFilter;

#[derive(Parser, Debug)]
#[command(name = "expense-tracker", version)]
#[command(about = "Expense Tracker: record expenses, filter them, and check a budget")]
pub(crate) struct Cli {
    /// Directory holding expenses.json and budget.json (default: platform data dir).
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Log to stderr: -v for info, -vv for debug. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    /// Record an expense dated today
    Add(AddArgs),
    /// List expenses as a table
    List(FilterArgs),
    /// Print the total of matching expenses
    Summary(SummaryArgs),
    /// Replace the budget
    SetBudget(SetBudgetArgs),
    /// Compare total spending against the budget
    CheckBudget,
    /// Delete an expense by ID
    Delete(DeleteArgs),
    /// Write matching expenses to a CSV file
    Export(ExportArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub(crate) struct AddArgs {
    #[arg(long)]
    pub(crate) description: String,
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: Decimal,
    #[arg(long)]
    pub(crate) category: String,
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub(crate) struct FilterArgs {
    /// Only expenses in this category (case-insensitive)
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// Only expenses dated in this month, 1-12
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub(crate) month: Option<u32>,
}

impl FilterArgs {
    pub(crate) fn to_filter(&self) -> ExpenseFilter {
        ExpenseFilter::new(self.category.clone(), self.month)
    }
}

#[derive(Args, Debug, PartialEq, Eq)]
pub(crate) struct SummaryArgs {
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Also print totals per category
    #[arg(long)]
    pub(crate) by_category: bool,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub(crate) struct SetBudgetArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) amount: Decimal,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub(crate) struct DeleteArgs {
    #[arg(long)]
    pub(crate) id: u32,
}

#[derive(Args, Debug, PartialEq, Eq)]
pub(crate) struct ExportArgs {
    /// Destination CSV file
    pub(crate) path: PathBuf,
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
}
