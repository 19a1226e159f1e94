mod json;
#[cfg(test)]
mod memory;

use anyhow::Result;

use crate::models::{Budget, Expense};

pub(crate) use json::JsonStore;
#[cfg(test)]
pub(crate) use memory::MemoryStore;

/// Whole-document persistence for the expense collection and the budget.
///
/// Each load returns the full document and each save replaces it. A missing
/// document is empty state, never an error.
pub(crate) trait Storage {
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn save_expenses(&mut self, expenses: &[Expense]) -> Result<()>;
    fn load_budget(&self) -> Result<Budget>;
    fn save_budget(&mut self, budget: &Budget) -> Result<()>;
}
