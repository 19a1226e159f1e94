mod budget;
mod expense;
mod filter;

pub use budget::{Budget, BudgetStatus};
pub use expense::Expense;
pub use filter::ExpenseFilter;

#[cfg(test)]
mod tests;
