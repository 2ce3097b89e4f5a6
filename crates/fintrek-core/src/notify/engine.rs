//! Notification engine - runs the rule set over a collection snapshot

use crate::models::{BudgetLimit, Category, Transaction};

use super::limit::BudgetLimitRule;
use super::portfolio::PortfolioRule;
use super::types::Notification;

/// A read-only snapshot of the collections a rule evaluates against.
/// The engine never mutates these; the caller re-derives a fresh context
/// from the latest state before every evaluation.
pub struct EvalContext<'a> {
    pub transactions: &'a [Transaction],
    pub categories: &'a [Category],
    pub limits: &'a [BudgetLimit],
}

impl<'a> EvalContext<'a> {
    pub fn new(
        transactions: &'a [Transaction],
        categories: &'a [Category],
        limits: &'a [BudgetLimit],
    ) -> Self {
        Self {
            transactions,
            categories,
            limits,
        }
    }
}

/// A notification rule. Rules are pure: same snapshot in, same ordered
/// notifications out.
pub trait Rule: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the snapshot and produce notifications
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Notification>;
}

/// The notification engine that runs rules over a snapshot.
///
/// Rules run in registration order and their output is concatenated as-is;
/// the order is part of the contract. Per-category limit alerts come first
/// (in limit-list order), then at most one whole-portfolio alert.
pub struct NotificationEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for NotificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationEngine {
    /// Create an engine with the built-in rule set
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(BudgetLimitRule::new()));
        engine.register(Box::new(PortfolioRule::new()));

        engine
    }

    /// Register a rule. It runs after all previously registered rules.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Run all rules and collect their notifications in order
    pub fn evaluate_all(&self, ctx: &EvalContext<'_>) -> Vec<Notification> {
        let mut notifications = vec![];

        for rule in &self.rules {
            let produced = rule.evaluate(ctx);
            tracing::debug!(
                rule = rule.name(),
                count = produced.len(),
                "Rule evaluation complete"
            );
            notifications.extend(produced);
        }

        notifications
    }

    /// Names of the registered rules, in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
