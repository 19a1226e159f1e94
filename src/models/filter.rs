use super::Expense;

/// Optional category and month constraints shared by `list`, `summary`
/// and `export`. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub category: Option<String>,
    /// 1-12, matched against the date's month in any year.
    pub month: Option<u32>,
}

impl ExpenseFilter {
    pub fn new(category: Option<String>, month: Option<u32>) -> Self {
        Self { category, month }
    }

    pub fn matches_category(&self, expense: &Expense) -> bool {
        self.category
            .as_deref()
            .map_or(true, |c| expense.in_category(c))
    }

    pub fn matches_month(&self, expense: &Expense) -> bool {
        self.month.map_or(true, |m| expense.in_month(m))
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.matches_category(expense) && self.matches_month(expense)
    }
}
