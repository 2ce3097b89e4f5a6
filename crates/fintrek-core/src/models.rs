//! Domain models for FinTrek

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether a category, transaction, or plan records money coming in or going out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown kind: {}", s)),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named, colored, iconed classification, fixed to income or expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Display icon tag for the presentation layer (e.g. "ShoppingCart")
    pub icon: String,
    /// Hex color, e.g. "#f97316"
    pub color: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

impl Category {
    /// Find a category by id in a slice. Dangling references resolve to None.
    pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }
}

/// Fields for a category created through the add-category form
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub kind: Kind,
}

/// A single recorded income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Family member this transaction is attributed to, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    /// Always positive; direction comes from `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: Kind,
    /// May dangle; the engine never assumes referential integrity
    pub category_id: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Fields for a transaction created through the add-transaction form
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub member_id: Option<String>,
    pub amount: f64,
    pub kind: Kind,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDate,
}

/// A ceiling amount attached to one expense category.
/// At most one limit per category; updates go through upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimit {
    pub category_id: String,
    pub limit: f64,
}

/// A planned amount for a member/category/kind/month, compared against
/// actual transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    pub id: String,
    pub member_id: String,
    pub category_id: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub planned_amount: f64,
    pub month: MonthKey,
}

/// Fields for a plan created through the add-plan form
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub member_id: String,
    pub category_id: String,
    pub kind: Kind,
    pub planned_amount: f64,
    pub month: MonthKey,
}

/// Role of a family member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Parent,
    Child,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }

    /// Default avatar glyph for a newly added member
    pub fn default_avatar(&self) -> &'static str {
        match self {
            Self::Parent => "👨",
            Self::Child => "🧒",
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            _ => Err(format!("Unknown member role: {}", s)),
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An actor transactions and plans can be attributed to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: String,
    pub name: String,
    pub role: MemberRole,
    pub avatar: String,
    pub color: String,
}

/// A year-month reporting key, serialized as "YYYY-MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Whether a calendar date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::str::FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month key: {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid month key: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month key: {}", s))?;
        Self::new(year, month).ok_or_else(|| format!("Invalid month key: {}", s))
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<MonthKey> for String {
    fn from(m: MonthKey) -> Self {
        m.to_string()
    }
}
