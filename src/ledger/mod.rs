//! Operations over the persisted expense collection and budget.
//!
//! Every operation loads what it needs from the given `Storage`, computes,
//! and saves only when it mutated something.

mod budget;
mod expenses;

pub(crate) use budget::{check_budget, set_budget};
pub(crate) use expenses::{
    add_expense, delete_expense, list_expenses, spending_by_category, summarize,
};
