//! FinTrek Core Library
//!
//! Budget aggregation and notification engine for a family finance tracker:
//! - Domain models for transactions, categories, limits, plans, and members
//! - Pure aggregation functions (totals, savings rate, breakdowns, progress)
//! - Notification rule evaluator for limit breaches and portfolio health
//! - In-memory ledger owning the collections, with validated mutations
//! - Demo seed data matching the sample dataset the UI ships with
//!
//! The engine is synchronous and stateless: callers pass a snapshot of the
//! collections into each call and re-derive everything after a mutation.
//! There is no persistence; state lives for the session only.

pub mod error;
pub mod format;
pub mod ledger;
pub mod models;
pub mod notify;
pub mod seed;
pub mod stats;

pub use error::{Error, Result};
pub use ledger::Ledger;
pub use models::{
    BudgetLimit, BudgetPlan, Category, FamilyMember, Kind, MemberRole, MonthKey, NewCategory,
    NewPlan, NewTransaction, Transaction,
};
pub use notify::{EvalContext, Notification, NotificationEngine, NotificationKind, Severity};
pub use stats::{CategoryTotal, LimitProgress, MemberTotals, PlanProgress, PlanTotals};
