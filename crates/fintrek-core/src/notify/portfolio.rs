//! Whole-portfolio rule
//!
//! Emits at most one notification per evaluation:
//! - `SavingsGreat` (success) when the rounded savings rate is >= 30%
//! - `NegativeBalance` (danger) otherwise, when expenses exceed income

use crate::models::Kind;
use crate::stats;

use super::engine::{EvalContext, Rule};
use super::types::{Notification, NotificationKind, PortfolioAlertData, Severity};

const GREAT_SAVINGS_RATE_PCT: f64 = 30.0;

/// Rule that looks at overall income vs expense
pub struct PortfolioRule;

impl PortfolioRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PortfolioRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for PortfolioRule {
    fn name(&self) -> &'static str {
        "Portfolio"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Notification> {
        let total_income = stats::total_by_kind(ctx.transactions, Kind::Income);
        let total_expense = stats::total_by_kind(ctx.transactions, Kind::Expense);
        let savings_rate = stats::savings_rate_signed(ctx.transactions);

        let data = PortfolioAlertData {
            total_income,
            total_expense,
            savings_rate,
        };

        if savings_rate >= GREAT_SAVINGS_RATE_PCT {
            vec![Notification::new(
                "savings-great",
                NotificationKind::SavingsGreat,
                Severity::Success,
                "Great savings!",
                format!(
                    "You are setting aside {}% of your income — keep it up!",
                    savings_rate
                ),
                "TrendingUp",
            )
            .with_data(serde_json::to_value(&data).unwrap_or_default())]
        } else if total_expense > total_income {
            vec![Notification::new(
                "balance-negative",
                NotificationKind::NegativeBalance,
                Severity::Danger,
                "Expenses exceed income",
                "Review your budget — expenses exceeded income this month",
                "TrendingDown",
            )
            .with_data(serde_json::to_value(&data).unwrap_or_default())]
        } else {
            vec![]
        }
    }
}
