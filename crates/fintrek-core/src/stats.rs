//! Aggregation engine
//!
//! Pure, stateless functions over a snapshot of the collections. Every call
//! recomputes from scratch; nothing is cached between calls. Datasets are
//! small, so each operation is a single pass over the transaction list.
//!
//! Division-by-zero denominators (zero income, zero limit, zero planned
//! amount) short-circuit to 0 instead of producing NaN/Inf.

use serde::Serialize;

use crate::models::{BudgetLimit, BudgetPlan, Category, Kind, MonthKey, Transaction};

/// One category's total within a breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub amount: f64,
}

/// Income/expense/balance restricted to one member's transactions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTotals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// One plan's actual-vs-planned progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub plan: BudgetPlan,
    pub fact_amount: f64,
    /// Capped at 100 for display
    pub percentage: f64,
    pub is_over_budget: bool,
}

/// Planned and actual totals for one member and month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTotals {
    pub planned_income: f64,
    pub planned_expense: f64,
    pub fact_income: f64,
    pub fact_expense: f64,
}

/// One limit's spending progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitProgress {
    pub category_id: String,
    pub spent: f64,
    pub limit: f64,
    /// Capped at 100 for display
    pub percentage: f64,
    pub is_over: bool,
}

/// Sum of amounts over transactions of the given kind. Empty input is 0.
pub fn total_by_kind(transactions: &[Transaction], kind: Kind) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Total income minus total expense
pub fn balance(transactions: &[Transaction]) -> f64 {
    total_by_kind(transactions, Kind::Income) - total_by_kind(transactions, Kind::Expense)
}

/// Share of income kept, rounded to the nearest whole percent (half away
/// from zero). Negative when expenses exceed income; 0 when there is no
/// income at all.
pub fn savings_rate_signed(transactions: &[Transaction]) -> f64 {
    let income = total_by_kind(transactions, Kind::Income);
    if income <= 0.0 {
        return 0.0;
    }
    let expense = total_by_kind(transactions, Kind::Expense);
    (((income - expense) / income) * 100.0).round()
}

/// Savings rate clamped to a non-negative display value
pub fn savings_rate_clamped(transactions: &[Transaction]) -> f64 {
    savings_rate_signed(transactions).max(0.0)
}

/// Sum of expense transactions in one category
pub fn spent_by_category(transactions: &[Transaction], category_id: &str) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == Kind::Expense && t.category_id == category_id)
        .map(|t| t.amount)
        .sum()
}

/// `part` as a percentage of `whole`, 0 when the denominator is not positive
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}

/// Per-category totals for the given kind, zero amounts dropped, sorted
/// descending by amount. The sort is stable: tied categories keep their
/// original category-list order, which decides what a top-N cut shows.
pub fn category_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
    kind: Kind,
) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = categories
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| CategoryTotal {
            category: c.clone(),
            amount: transactions
                .iter()
                .filter(|t| t.kind == kind && t.category_id == c.id)
                .map(|t| t.amount)
                .sum(),
        })
        .filter(|entry| entry.amount > 0.0)
        .collect();

    breakdown.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    breakdown
}

/// First `n` entries of an already-sorted breakdown
pub fn top_n(breakdown: &[CategoryTotal], n: usize) -> &[CategoryTotal] {
    &breakdown[..n.min(breakdown.len())]
}

/// Income, expense, and balance restricted to one member's transactions
pub fn member_totals(transactions: &[Transaction], member_id: &str) -> MemberTotals {
    let for_member = |kind: Kind| -> f64 {
        transactions
            .iter()
            .filter(|t| t.kind == kind && t.member_id.as_deref() == Some(member_id))
            .map(|t| t.amount)
            .sum()
    };
    let income = for_member(Kind::Income);
    let expense = for_member(Kind::Expense);
    MemberTotals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Actual amount recorded against one member/category/kind within a month
fn fact_amount(
    transactions: &[Transaction],
    member_id: &str,
    category_id: &str,
    kind: Kind,
    month: &MonthKey,
) -> f64 {
    transactions
        .iter()
        .filter(|t| {
            t.member_id.as_deref() == Some(member_id)
                && t.category_id == category_id
                && t.kind == kind
                && month.contains(t.date)
        })
        .map(|t| t.amount)
        .sum()
}

/// Actual-vs-planned progress for every plan belonging to a member and month,
/// in plan-list order
pub fn plan_progress(
    plans: &[BudgetPlan],
    transactions: &[Transaction],
    member_id: &str,
    month: &MonthKey,
) -> Vec<PlanProgress> {
    plans
        .iter()
        .filter(|p| p.member_id == member_id && p.month == *month)
        .map(|p| {
            let fact = fact_amount(transactions, member_id, &p.category_id, p.kind, month);
            PlanProgress {
                fact_amount: fact,
                percentage: percentage(fact, p.planned_amount).min(100.0),
                is_over_budget: fact > p.planned_amount && p.kind == Kind::Expense,
                plan: p.clone(),
            }
        })
        .collect()
}

/// Planned and actual income/expense totals for one member and month
pub fn plan_totals(
    plans: &[BudgetPlan],
    transactions: &[Transaction],
    member_id: &str,
    month: &MonthKey,
) -> PlanTotals {
    let mut totals = PlanTotals {
        planned_income: 0.0,
        planned_expense: 0.0,
        fact_income: 0.0,
        fact_expense: 0.0,
    };
    for plan in plans
        .iter()
        .filter(|p| p.member_id == member_id && p.month == *month)
    {
        let fact = fact_amount(transactions, member_id, &plan.category_id, plan.kind, month);
        match plan.kind {
            Kind::Income => {
                totals.planned_income += plan.planned_amount;
                totals.fact_income += fact;
            }
            Kind::Expense => {
                totals.planned_expense += plan.planned_amount;
                totals.fact_expense += fact;
            }
        }
    }
    totals
}

/// Spending progress against every limit, in limit-list order
pub fn limit_progress(limits: &[BudgetLimit], transactions: &[Transaction]) -> Vec<LimitProgress> {
    limits
        .iter()
        .map(|l| {
            let spent = spent_by_category(transactions, &l.category_id);
            LimitProgress {
                category_id: l.category_id.clone(),
                spent,
                limit: l.limit,
                percentage: percentage(spent, l.limit).min(100.0),
                is_over: spent > l.limit,
            }
        })
        .collect()
}
