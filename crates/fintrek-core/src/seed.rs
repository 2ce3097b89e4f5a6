//! Demo seed data
//!
//! The sample dataset the UI loads on start: one fixed month of activity
//! for a single user. Family members and plans start empty; they are added
//! through the ledger at runtime.

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::models::{BudgetLimit, Category, Kind, MonthKey, Transaction};

/// The month the demo data reports on
pub fn demo_month() -> MonthKey {
    MonthKey::new(2026, 2).unwrap()
}

fn category(id: &str, name: &str, icon: &str, color: &str, kind: Kind) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        kind,
    }
}

fn transaction(
    id: &str,
    amount: f64,
    kind: Kind,
    category_id: &str,
    description: &str,
    date: (i32, u32, u32),
) -> Transaction {
    Transaction {
        id: id.to_string(),
        member_id: None,
        amount,
        kind,
        category_id: category_id.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
    }
}

pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Salary", "Briefcase", "#10b981", Kind::Income),
        category("2", "Freelance", "Laptop", "#06b6d4", Kind::Income),
        category("3", "Investments", "TrendingUp", "#8b5cf6", Kind::Income),
        category("4", "Groceries", "ShoppingCart", "#f97316", Kind::Expense),
        category("5", "Transport", "Car", "#3b82f6", Kind::Expense),
        category("6", "Entertainment", "Gamepad2", "#ec4899", Kind::Expense),
        category("7", "Utilities", "Home", "#6366f1", Kind::Expense),
        category("8", "Health", "Heart", "#ef4444", Kind::Expense),
        category("9", "Cafes & Restaurants", "UtensilsCrossed", "#d97706", Kind::Expense),
    ]
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("1", 85000.0, Kind::Income, "1", "January salary", (2026, 1, 31)),
        transaction("2", 15000.0, Kind::Income, "2", "Client website", (2026, 2, 5)),
        transaction("3", 4200.0, Kind::Expense, "4", "Supermarket", (2026, 2, 10)),
        transaction("4", 3500.0, Kind::Expense, "5", "Fuel", (2026, 2, 12)),
        transaction("5", 2800.0, Kind::Expense, "6", "Cinema", (2026, 2, 14)),
        transaction("6", 8500.0, Kind::Expense, "7", "Rent", (2026, 2, 15)),
        transaction("7", 1200.0, Kind::Expense, "9", "Lunch at a cafe", (2026, 2, 17)),
        transaction("8", 5000.0, Kind::Income, "3", "Dividends", (2026, 2, 18)),
        transaction("9", 3100.0, Kind::Expense, "8", "Pharmacy", (2026, 2, 19)),
        transaction("10", 6200.0, Kind::Expense, "4", "Hypermarket", (2026, 2, 20)),
    ]
}

pub fn limits() -> Vec<BudgetLimit> {
    [("4", 8000.0), ("5", 5000.0), ("6", 3000.0), ("9", 2000.0)]
        .into_iter()
        .map(|(category_id, limit)| BudgetLimit {
            category_id: category_id.to_string(),
            limit,
        })
        .collect()
}

/// A ledger pre-loaded with the demo dataset
pub fn demo_ledger() -> Ledger {
    Ledger::from_parts(categories(), transactions(), limits())
}
