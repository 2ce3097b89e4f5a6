//! Core types for the notification engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of notifications the rules can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Spending in a category reached or passed its limit
    LimitExceeded,
    /// Spending in a category reached 80% of its limit
    LimitWarning,
    /// Savings rate is at or above the praise threshold
    SavingsGreat,
    /// Expenses exceed income across the whole portfolio
    NegativeBalance,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LimitExceeded => "limit_exceeded",
            Self::LimitWarning => "limit_warning",
            Self::SavingsGreat => "savings_great",
            Self::NegativeBalance => "negative_balance",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "limit_exceeded" => Ok(Self::LimitExceeded),
            "limit_warning" => Ok(Self::LimitWarning),
            "savings_great" => Ok(Self::SavingsGreat),
            "negative_balance" => Ok(Self::NegativeBalance),
            _ => Err(format!("Unknown notification kind: {}", s)),
        }
    }
}

/// Severity level of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Danger,
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            "success" => Ok(Self::Success),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A derived alert describing a limit breach/warning or an overall
/// portfolio condition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Deterministic id derived from rule and category, so re-evaluation on
    /// unchanged input yields identical ids (e.g. "over-4", "savings-great")
    pub id: String,
    pub kind: NotificationKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Display icon tag for the presentation layer (e.g. "AlertCircle")
    pub icon: String,
    /// Rule-specific structured data
    pub data: serde_json::Value,
}

impl Notification {
    pub fn new(
        id: impl Into<String>,
        kind: NotificationKind,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity,
            title: title.into(),
            message: message.into(),
            icon: icon.into(),
            data: serde_json::Value::Null,
        }
    }

    /// Attach a structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Data for limit breach/warning notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitAlertData {
    pub category_id: String,
    pub category_name: String,
    pub spent: f64,
    pub limit: f64,
}

/// Data for whole-portfolio notifications
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAlertData {
    pub total_income: f64,
    pub total_expense: f64,
    pub savings_rate: f64,
}
