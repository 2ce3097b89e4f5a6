//! Notification rule evaluator
//!
//! Derives an ordered list of alerts from a snapshot of the transactions,
//! categories, and limits. Evaluation is stateless and deterministic: the
//! same snapshot always yields the same notifications with the same ids in
//! the same order.
//!
//! ## Built-in rules
//!
//! - **Budget Limits** - per-category limit breach/warning alerts
//! - **Portfolio** - whole-portfolio savings praise or deficit alert
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fintrek_core::notify::{EvalContext, NotificationEngine};
//!
//! let engine = NotificationEngine::new();
//! let ctx = EvalContext::new(&transactions, &categories, &limits);
//! let notifications = engine.evaluate_all(&ctx);
//! ```

pub mod engine;
pub mod limit;
pub mod portfolio;
pub mod types;

pub use engine::{EvalContext, NotificationEngine, Rule};
pub use limit::BudgetLimitRule;
pub use portfolio::PortfolioRule;
pub use types::{
    LimitAlertData, Notification, NotificationKind, PortfolioAlertData, Severity,
};
