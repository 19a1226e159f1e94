use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::{Budget, BudgetStatus, Expense};
use crate::store::Storage;

pub(crate) fn set_budget<S: Storage>(store: &mut S, amount: Decimal) -> Result<Budget> {
    let budget = Budget::new(amount);
    store.save_budget(&budget)?;
    tracing::info!(budget = %amount, "budget set");
    Ok(budget)
}

/// Compare the total of every expense, unfiltered, against the budget.
pub(crate) fn check_budget<S: Storage>(store: &S) -> Result<BudgetStatus> {
    let spent = Expense::total(&store.load_expenses()?)?;
    let budget = store.load_budget()?;
    tracing::debug!(spent = %spent, budget = %budget.limit_amount, "checking budget");
    budget.status(spent)
}
