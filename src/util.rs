use rust_decimal::{Decimal, RoundingStrategy};

/// Round to cents, halves away from zero. Anything that rounds to zero
/// comes back as a plain (unsigned) zero.
pub(crate) fn round_cents(val: Decimal) -> Decimal {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Amount column text: rounded to cents, always two decimals.
pub(crate) fn format_amount(val: Decimal) -> String {
    format!("{:.2}", round_cents(val))
}

/// Format a decimal amount as dollars with exactly 2 decimal places.
/// e.g. `19.75` → `"$19.75"`, `1.999` → `"$2.00"`, `-4` → `"-$4.00"`
pub(crate) fn format_currency(val: Decimal) -> String {
    let rounded = round_cents(val);
    let abs = format_amount(rounded.abs());
    if rounded < Decimal::ZERO {
        format!("-${abs}")
    } else {
        format!("${abs}")
    }
}

/// Fit `s` into `width` characters; a cut string ends in "…".
pub(crate) fn truncate(s: &str, width: usize) -> String {
    if s.chars().nth(width).is_none() {
        return s.to_string();
    }
    let kept: String = s.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
