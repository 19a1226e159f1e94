#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn make_expense(id: u32, date: &str, category: &str) -> Expense {
    Expense::new(
        id,
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        "Test".into(),
        dec!(10.00),
        category.into(),
    )
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_in_category_ignores_case() {
    let e = make_expense(1, "2024-01-15", "Food");
    assert!(e.in_category("food"));
    assert!(e.in_category("FOOD"));
    assert!(!e.in_category("Transport"));
}

#[test]
fn test_in_month() {
    let e = make_expense(1, "2024-03-31", "Food");
    assert!(e.in_month(3));
    assert!(!e.in_month(4));
}

#[test]
fn test_next_id_empty() {
    assert_eq!(Expense::next_id(&[]).unwrap(), 1);
}

#[test]
fn test_next_id_uses_max_not_count() {
    // ids 1 and 3 remain after deleting 2: count + 1 would reissue 3
    let expenses = vec![
        make_expense(1, "2024-01-01", "Food"),
        make_expense(3, "2024-01-02", "Food"),
    ];
    assert_eq!(Expense::next_id(&expenses).unwrap(), 4);
}

#[test]
fn test_next_id_exhausted_is_error() {
    let expenses = vec![make_expense(u32::MAX, "2024-01-01", "Food")];
    assert!(Expense::next_id(&expenses).is_err());
}

#[test]
fn test_expense_json_shape() {
    let e = Expense::new(
        7,
        NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
        "Coffee".into(),
        dec!(3.5),
        "Food".into(),
    );
    let value = serde_json::to_value(&e).unwrap();
    assert_eq!(value["id"], 7);
    assert_eq!(value["date"], "2024-05-09");
    assert_eq!(value["description"], "Coffee");
    assert_eq!(value["amount"], 3.5);
    assert_eq!(value["category"], "Food");
}

#[test]
fn test_expense_amount_stays_exact() {
    let e = Expense::new(
        1,
        NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
        "Car".into(),
        dec!(12345678901234567.89),
        "Transport".into(),
    );
    let json = serde_json::to_string(&e).unwrap();
    assert!(json.contains("\"amount\":12345678901234567.89"));
    let back: Expense = serde_json::from_str(&json).unwrap();
    assert_eq!(back.amount, dec!(12345678901234567.89));
}

#[test]
fn test_expense_reads_integer_amount() {
    let json = r#"{"id":1,"date":"2024-01-15","description":"Bus","amount":2,"category":"Transport"}"#;
    let e: Expense = serde_json::from_str(json).unwrap();
    assert_eq!(e.amount, dec!(2));
    assert_eq!(e.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
}

#[test]
fn test_total() {
    let mut a = make_expense(1, "2024-01-01", "Food");
    a.amount = dec!(12.5);
    let mut b = make_expense(2, "2024-01-02", "Food");
    b.amount = dec!(7.25);
    assert_eq!(Expense::total(&[a, b]).unwrap(), dec!(19.75));
    let none: Vec<Expense> = Vec::new();
    assert_eq!(Expense::total(&none).unwrap(), Decimal::ZERO);
}

#[test]
fn test_total_overflow_is_error() {
    let mut a = make_expense(1, "2024-01-01", "Food");
    a.amount = Decimal::MAX;
    let mut b = make_expense(2, "2024-01-02", "Food");
    b.amount = dec!(1);
    assert!(Expense::total(&[a, b]).is_err());
}

// ── ExpenseFilter ─────────────────────────────────────────────

#[test]
fn test_empty_filter_matches_all() {
    let filter = ExpenseFilter::default();
    assert!(filter.matches(&make_expense(1, "2024-01-15", "Food")));
    assert!(filter.matches(&make_expense(2, "2023-12-01", "")));
}

#[test]
fn test_filter_category_and_month() {
    let filter = ExpenseFilter::new(Some("food".into()), Some(1));
    assert!(filter.matches(&make_expense(1, "2024-01-15", "Food")));
    assert!(!filter.matches(&make_expense(2, "2024-02-15", "Food")));
    assert!(!filter.matches(&make_expense(3, "2024-01-15", "Rent")));
}

#[test]
fn test_filter_month_ignores_year() {
    let filter = ExpenseFilter::new(None, Some(6));
    assert!(filter.matches(&make_expense(1, "2022-06-01", "Food")));
    assert!(filter.matches(&make_expense(2, "2024-06-30", "Food")));
}

// ── Budget ────────────────────────────────────────────────────

#[test]
fn test_budget_default_is_zero() {
    assert_eq!(Budget::default().limit_amount, Decimal::ZERO);
}

#[test]
fn test_budget_json_shape() {
    let value = serde_json::to_value(Budget::new(dec!(250.5))).unwrap();
    assert_eq!(value, serde_json::json!({ "budget": 250.5 }));
}

#[test]
fn test_status_within() {
    let status = Budget::new(dec!(10)).status(dec!(5.50)).unwrap();
    assert_eq!(status, BudgetStatus::Within { remaining: dec!(4.50) });
}

#[test]
fn test_status_exactly_at_limit_is_within() {
    let status = Budget::new(dec!(10)).status(dec!(10)).unwrap();
    assert_eq!(status, BudgetStatus::Within { remaining: Decimal::ZERO });
}

#[test]
fn test_status_exceeded() {
    let status = Budget::new(dec!(10)).status(dec!(12.25)).unwrap();
    assert_eq!(status, BudgetStatus::Exceeded { by: dec!(2.25) });
}

#[test]
fn test_status_negative_spending_is_within() {
    let status = Budget::new(dec!(10)).status(dec!(-5)).unwrap();
    assert_eq!(status, BudgetStatus::Within { remaining: dec!(15) });
}

#[test]
fn test_status_difference_overflow_is_error() {
    assert!(Budget::new(Decimal::MAX).status(dec!(-1)).is_err());
}

#[test]
fn test_status_zero_budget_reports_exceeded() {
    let status = Budget::default().status(dec!(3)).unwrap();
    assert_eq!(status, BudgetStatus::Exceeded { by: dec!(3) });
}
