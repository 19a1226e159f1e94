use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

use crate::models::Expense;

/// One CSV line. The amount is written from its decimal text, exactly as
/// stored.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: u32,
    date: NaiveDate,
    description: &'a str,
    amount: String,
    category: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(e: &'a Expense) -> Self {
        Self {
            id: e.id,
            date: e.date,
            description: &e.description,
            amount: e.amount.to_string(),
            category: &e.category,
        }
    }
}

/// Write expenses as CSV with an `id,date,description,amount,category`
/// header. Returns the number of rows written.
pub(crate) fn export_to_csv(path: &Path, expenses: &[Expense]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for expense in expenses {
        wtr.serialize(CsvRow::from(expense))
            .with_context(|| format!("Failed to write expense {}", expense.id))?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    tracing::info!(path = %path.display(), count = expenses.len(), "exported expenses");
    Ok(expenses.len())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
