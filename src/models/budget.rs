use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(rename = "budget", with = "rust_decimal::serde::arbitrary_precision")]
    pub limit_amount: Decimal,
}

impl Budget {
    pub fn new(limit_amount: Decimal) -> Self {
        Self { limit_amount }
    }

    /// Compare total spending against the limit. The sign of the difference
    /// alone picks the variant.
    pub fn status(&self, spent: Decimal) -> Result<BudgetStatus> {
        let remaining = self
            .limit_amount
            .checked_sub(spent)
            .context("Budget difference is too large to represent")?;
        if remaining < Decimal::ZERO {
            Ok(BudgetStatus::Exceeded { by: -remaining })
        } else {
            Ok(BudgetStatus::Within { remaining })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Exceeded { by: Decimal },
    Within { remaining: Decimal },
}
