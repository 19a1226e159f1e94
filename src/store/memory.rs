use anyhow::Result;

use super::Storage;
use crate::models::{Budget, Expense};

/// In-memory stand-in for `JsonStore`. `saves` counts every write so tests
/// can assert that an operation left storage untouched.
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub(crate) expenses: Vec<Expense>,
    pub(crate) budget: Option<Budget>,
    pub(crate) saves: usize,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn save_expenses(&mut self, expenses: &[Expense]) -> Result<()> {
        self.expenses = expenses.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_budget(&self) -> Result<Budget> {
        Ok(self.budget.clone().unwrap_or_default())
    }

    fn save_budget(&mut self, budget: &Budget) -> Result<()> {
        self.budget = Some(budget.clone());
        self.saves += 1;
        Ok(())
    }
}
