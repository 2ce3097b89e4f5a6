//! End-to-end tests driving the seeded ledger through the aggregation
//! engine and the notification evaluator, the way a presentation layer
//! would on every render.

use chrono::NaiveDate;
use fintrek_core::notify::NotificationKind;
use fintrek_core::{
    seed, stats, EvalContext, Kind, Ledger, MemberRole, NewPlan, NewTransaction,
    NotificationEngine, Severity,
};

#[test]
fn seeded_ledger_totals() {
    let ledger = seed::demo_ledger();

    assert_eq!(stats::total_by_kind(ledger.transactions(), Kind::Income), 105_000.0);
    assert_eq!(stats::total_by_kind(ledger.transactions(), Kind::Expense), 29_500.0);
    assert_eq!(stats::balance(ledger.transactions()), 75_500.0);
    assert_eq!(stats::savings_rate_signed(ledger.transactions()), 72.0);
    assert_eq!(stats::savings_rate_clamped(ledger.transactions()), 72.0);
}

#[test]
fn seeded_ledger_expense_breakdown() {
    let ledger = seed::demo_ledger();
    let breakdown =
        stats::category_breakdown(ledger.transactions(), ledger.categories(), Kind::Expense);

    // Groceries (4200 + 6200) leads, then Rent, Fuel, Pharmacy, Cinema, Cafe
    let ids: Vec<&str> = breakdown.iter().map(|e| e.category.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "7", "5", "8", "6", "9"]);
    assert_eq!(breakdown[0].amount, 10_400.0);

    // Strictly non-increasing amounts, nothing at zero
    for pair in breakdown.windows(2) {
        assert!(pair[0].amount >= pair[1].amount);
    }
    assert!(breakdown.iter().all(|e| e.amount > 0.0));

    let top = stats::top_n(&breakdown, 5);
    assert_eq!(top.len(), 5);
    assert_eq!(top[0].category.name, "Groceries");
}

#[test]
fn seeded_ledger_limit_progress() {
    let ledger = seed::demo_ledger();
    let progress = stats::limit_progress(ledger.limits(), ledger.transactions());

    assert_eq!(progress.len(), 4);
    for entry in &progress {
        assert!((0.0..=100.0).contains(&entry.percentage));
        assert_eq!(entry.is_over, entry.spent > entry.limit);
    }

    // Groceries over (10400 / 8000), Entertainment near (2800 / 3000)
    assert!(progress[0].is_over);
    assert_eq!(progress[0].percentage, 100.0);
    assert!(!progress[2].is_over);
    assert!(progress[2].percentage > 90.0);
}

#[test]
fn seeded_ledger_notifications() {
    let ledger = seed::demo_ledger();
    let engine = NotificationEngine::new();
    let ctx = EvalContext::new(ledger.transactions(), ledger.categories(), ledger.limits());
    let notifications = engine.evaluate_all(&ctx);

    let ids: Vec<&str> = notifications.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["over-4", "warn-6", "savings-great"]);

    assert_eq!(notifications[0].kind, NotificationKind::LimitExceeded);
    assert_eq!(notifications[1].kind, NotificationKind::LimitWarning);
    assert_eq!(notifications[2].kind, NotificationKind::SavingsGreat);

    // Severity counts are derived by the caller
    let danger = notifications.iter().filter(|n| n.severity == Severity::Danger).count();
    let warning = notifications.iter().filter(|n| n.severity == Severity::Warning).count();
    assert_eq!(danger, 1);
    assert_eq!(warning, 1);
}

#[test]
fn notifications_are_stable_across_evaluations() {
    let ledger = seed::demo_ledger();
    let engine = NotificationEngine::new();
    let ctx = EvalContext::new(ledger.transactions(), ledger.categories(), ledger.limits());

    let first = engine.evaluate_all(&ctx);
    let second = engine.evaluate_all(&ctx);
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn add_then_delete_round_trips_every_aggregate() {
    let mut ledger = seed::demo_ledger();
    let balance_before = stats::balance(ledger.transactions());
    let breakdown_before =
        stats::category_breakdown(ledger.transactions(), ledger.categories(), Kind::Expense);

    let id = ledger
        .add_transaction(NewTransaction {
            member_id: None,
            amount: 9999.0,
            kind: Kind::Expense,
            category_id: "5".to_string(),
            description: "Car service".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 21).unwrap(),
        })
        .unwrap()
        .id
        .clone();

    assert_ne!(stats::balance(ledger.transactions()), balance_before);

    ledger.delete_transaction(&id).unwrap();
    assert_eq!(stats::balance(ledger.transactions()), balance_before);

    let breakdown_after =
        stats::category_breakdown(ledger.transactions(), ledger.categories(), Kind::Expense);
    assert_eq!(breakdown_before.len(), breakdown_after.len());
    for (a, b) in breakdown_before.iter().zip(breakdown_after.iter()) {
        assert_eq!(a.category.id, b.category.id);
        assert_eq!(a.amount, b.amount);
    }
}

#[test]
fn mutation_changes_the_next_evaluation() {
    let mut ledger = seed::demo_ledger();
    let engine = NotificationEngine::new();

    // Transport is at 3500 of 5000; push it past the limit
    ledger
        .add_transaction(NewTransaction {
            member_id: None,
            amount: 2000.0,
            kind: Kind::Expense,
            category_id: "5".to_string(),
            description: "New tires".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 22).unwrap(),
        })
        .unwrap();

    let ctx = EvalContext::new(ledger.transactions(), ledger.categories(), ledger.limits());
    let notifications = engine.evaluate_all(&ctx);
    let ids: Vec<&str> = notifications.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["over-4", "over-5", "warn-6", "savings-great"]);
}

#[test]
fn family_planning_flow() {
    let mut ledger = seed::demo_ledger();
    let month = seed::demo_month();

    let member_id = ledger
        .add_member("Anna", MemberRole::Parent, "#8b5cf6")
        .unwrap()
        .id
        .clone();

    ledger
        .add_plan(NewPlan {
            member_id: member_id.clone(),
            category_id: "4".to_string(),
            kind: Kind::Expense,
            planned_amount: 5000.0,
            month,
        })
        .unwrap();
    ledger
        .add_plan(NewPlan {
            member_id: member_id.clone(),
            category_id: "1".to_string(),
            kind: Kind::Income,
            planned_amount: 90_000.0,
            month,
        })
        .unwrap();

    ledger
        .add_transaction(NewTransaction {
            member_id: Some(member_id.clone()),
            amount: 6000.0,
            kind: Kind::Expense,
            category_id: "4".to_string(),
            description: "Weekly groceries".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 23).unwrap(),
        })
        .unwrap();

    let progress = stats::plan_progress(ledger.plans(), ledger.transactions(), &member_id, &month);
    assert_eq!(progress.len(), 2);

    let expense = progress.iter().find(|p| p.plan.kind == Kind::Expense).unwrap();
    assert_eq!(expense.fact_amount, 6000.0);
    assert_eq!(expense.percentage, 100.0);
    assert!(expense.is_over_budget);

    let income = progress.iter().find(|p| p.plan.kind == Kind::Income).unwrap();
    assert_eq!(income.fact_amount, 0.0);
    assert_eq!(income.percentage, 0.0);
    assert!(!income.is_over_budget);

    let totals = stats::plan_totals(ledger.plans(), ledger.transactions(), &member_id, &month);
    assert_eq!(totals.planned_expense, 5000.0);
    assert_eq!(totals.fact_expense, 6000.0);
    assert_eq!(totals.planned_income, 90_000.0);
    assert_eq!(totals.fact_income, 0.0);

    let member = stats::member_totals(ledger.transactions(), &member_id);
    assert_eq!(member.expense, 6000.0);
    assert_eq!(member.balance, -6000.0);

    // Seed transactions carry no member attribution
    let nobody = stats::member_totals(seed::transactions().as_slice(), &member_id);
    assert_eq!(nobody.income, 0.0);
    assert_eq!(nobody.expense, 0.0);
}

#[test]
fn empty_ledger_is_quiet() {
    let ledger = Ledger::new();
    let engine = NotificationEngine::new();
    let ctx = EvalContext::new(ledger.transactions(), ledger.categories(), ledger.limits());

    assert!(engine.evaluate_all(&ctx).is_empty());
    assert_eq!(stats::balance(ledger.transactions()), 0.0);
    assert_eq!(stats::savings_rate_signed(ledger.transactions()), 0.0);
    assert!(stats::category_breakdown(ledger.transactions(), ledger.categories(), Kind::Expense)
        .is_empty());
}
