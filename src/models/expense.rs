use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    /// Serialized as "YYYY-MM-DD"
    pub date: NaiveDate,
    pub description: String,
    /// Written as an exact JSON number, never through `f64`.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
}

impl Expense {
    pub fn new(
        id: u32,
        date: NaiveDate,
        description: String,
        amount: Decimal,
        category: String,
    ) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            category,
        }
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub fn in_month(&self, month: u32) -> bool {
        self.date.month() == month
    }

    /// Next id for a collection: one past the highest id in use, 1 when empty.
    pub fn next_id(expenses: &[Expense]) -> Result<u32> {
        match expenses.iter().map(|e| e.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .with_context(|| format!("No expense id left after {max}")),
        }
    }

    /// Sum of amounts. Errors when the total leaves the range of `Decimal`.
    pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Result<Decimal> {
        expenses
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
            .context("Total of expenses is too large to represent")
    }
}
