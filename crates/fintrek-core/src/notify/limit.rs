//! Budget limit rule
//!
//! Emits one notification per breached or nearly-breached category limit:
//! - `LimitExceeded` (danger) once spending reaches 100% of the limit
//! - `LimitWarning` (warning) once spending reaches 80%
//!
//! Limits whose category reference dangles are skipped.

use crate::format::format_amount;
use crate::models::Category;
use crate::stats;

use super::engine::{EvalContext, Rule};
use super::types::{LimitAlertData, Notification, NotificationKind, Severity};

const WARNING_THRESHOLD_PCT: f64 = 80.0;

/// Rule that checks spending against every category limit
pub struct BudgetLimitRule;

impl BudgetLimitRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BudgetLimitRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for BudgetLimitRule {
    fn name(&self) -> &'static str {
        "Budget Limits"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Notification> {
        let mut notifications = Vec::new();

        for limit in ctx.limits {
            let Some(category) = Category::find_by_id(ctx.categories, &limit.category_id) else {
                tracing::debug!(
                    category_id = %limit.category_id,
                    "Skipping limit with dangling category reference"
                );
                continue;
            };

            let spent = stats::spent_by_category(ctx.transactions, &limit.category_id);
            let pct = stats::percentage(spent, limit.limit);

            let data = LimitAlertData {
                category_id: limit.category_id.clone(),
                category_name: category.name.clone(),
                spent,
                limit: limit.limit,
            };

            if pct >= 100.0 {
                notifications.push(
                    Notification::new(
                        format!("over-{}", limit.category_id),
                        NotificationKind::LimitExceeded,
                        Severity::Danger,
                        format!("Limit exceeded — {}", category.name),
                        format!(
                            "Spent {} ₽ of {} ₽",
                            format_amount(spent),
                            format_amount(limit.limit)
                        ),
                        "AlertCircle",
                    )
                    .with_data(serde_json::to_value(&data).unwrap_or_default()),
                );
            } else if pct >= WARNING_THRESHOLD_PCT {
                notifications.push(
                    Notification::new(
                        format!("warn-{}", limit.category_id),
                        NotificationKind::LimitWarning,
                        Severity::Warning,
                        format!("80% of limit — {}", category.name),
                        format!(
                            "{} ₽ left of {} ₽",
                            format_amount(limit.limit - spent),
                            format_amount(limit.limit)
                        ),
                        "AlertTriangle",
                    )
                    .with_data(serde_json::to_value(&data).unwrap_or_default()),
                );
            }
        }

        notifications
    }
}
