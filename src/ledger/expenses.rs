use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Expense, ExpenseFilter};
use crate::store::Storage;

pub(crate) fn add_expense<S: Storage>(
    store: &mut S,
    description: String,
    amount: Decimal,
    category: String,
    date: NaiveDate,
) -> Result<Expense> {
    let mut expenses = store.load_expenses()?;
    let expense = Expense::new(
        Expense::next_id(&expenses)?,
        date,
        description,
        amount,
        category,
    );
    expenses.push(expense.clone());
    store.save_expenses(&expenses)?;
    tracing::info!(id = expense.id, amount = %expense.amount, "added expense");
    Ok(expense)
}

/// Remove the first expense with `id`. Returns `None`, without saving, when
/// no expense matches.
pub(crate) fn delete_expense<S: Storage>(store: &mut S, id: u32) -> Result<Option<Expense>> {
    let mut expenses = store.load_expenses()?;
    let Some(pos) = expenses.iter().position(|e| e.id == id) else {
        tracing::info!(id, "expense not found, nothing deleted");
        return Ok(None);
    };
    let removed = expenses.remove(pos);
    store.save_expenses(&expenses)?;
    tracing::info!(id, "deleted expense");
    Ok(Some(removed))
}

/// Category constraint first, then month, in collection order.
pub(crate) fn list_expenses<S: Storage>(store: &S, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
    let expenses = store
        .load_expenses()?
        .into_iter()
        .filter(|e| filter.matches_category(e))
        .filter(|e| filter.matches_month(e))
        .collect();
    Ok(expenses)
}

/// Sum of amounts over the filtered expenses.
pub(crate) fn summarize<S: Storage>(store: &S, filter: &ExpenseFilter) -> Result<Decimal> {
    let expenses = store.load_expenses()?;
    Expense::total(
        expenses
            .iter()
            .filter(|e| filter.matches_month(e))
            .filter(|e| filter.matches_category(e)),
    )
}

/// Filtered totals grouped by category, largest first. Categories that
/// differ only in case are merged under the first spelling seen.
pub(crate) fn spending_by_category<S: Storage>(
    store: &S,
    filter: &ExpenseFilter,
) -> Result<Vec<(String, Decimal)>> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for expense in store.load_expenses()?.iter().filter(|e| filter.matches(e)) {
        match totals.iter_mut().find(|(name, _)| expense.in_category(name)) {
            Some((name, total)) => {
                *total = total
                    .checked_add(expense.amount)
                    .with_context(|| format!("Total for category {name} is too large"))?;
            }
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(totals)
}
