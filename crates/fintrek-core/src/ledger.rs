//! Owning state container for the collections
//!
//! The ledger is the single writer of the five collections; the engine
//! modules only ever see read-only slices of its state. Mutations validate
//! user input at the form boundary, so engine code can assume well-formed
//! entities (dangling category references excepted, which the engine
//! tolerates by design of the lookup functions).

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::{
    BudgetLimit, BudgetPlan, Category, FamilyMember, MemberRole, NewCategory, NewPlan,
    NewTransaction, Transaction,
};

/// In-memory state for one session. Nothing is persisted; a restart starts
/// from whatever seed the caller provides.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    limits: Vec<BudgetLimit>,
    plans: Vec<BudgetPlan>,
    members: Vec<FamilyMember>,
    last_id: i64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        limits: Vec<BudgetLimit>,
    ) -> Self {
        Self {
            transactions,
            categories,
            limits,
            plans: vec![],
            members: vec![],
            last_id: 0,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn limits(&self) -> &[BudgetLimit] {
        &self.limits
    }

    pub fn plans(&self) -> &[BudgetPlan] {
        &self.plans
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    /// Creation-time id: current millisecond timestamp, bumped when two
    /// creations land on the same millisecond
    fn next_id(&mut self) -> String {
        let candidate = Utc::now().timestamp_millis();
        self.last_id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id + 1
        };
        self.last_id.to_string()
    }

    /// Record a new transaction. Newest entries go first, matching the
    /// display order of the operations list.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction> {
        if !new.amount.is_finite() || new.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Transaction amount must be positive, got {}",
                new.amount
            )));
        }
        if new.description.trim().is_empty() {
            return Err(Error::InvalidData(
                "Transaction description must not be empty".to_string(),
            ));
        }
        if new.category_id.is_empty() {
            return Err(Error::InvalidData(
                "Transaction must have a category".to_string(),
            ));
        }

        let tx = Transaction {
            id: self.next_id(),
            member_id: new.member_id,
            amount: new.amount,
            kind: new.kind,
            category_id: new.category_id,
            description: new.description,
            date: new.date,
        };
        tracing::debug!(id = %tx.id, kind = %tx.kind, amount = tx.amount, "Transaction added");
        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    /// Delete a transaction by id
    pub fn delete_transaction(&mut self, id: &str) -> Result<()> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", id)))?;
        self.transactions.remove(pos);
        tracing::debug!(id, "Transaction deleted");
        Ok(())
    }

    /// Add a category. Categories are never deleted or mutated afterwards.
    pub fn add_category(&mut self, new: NewCategory) -> Result<&Category> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidData(
                "Category name must not be empty".to_string(),
            ));
        }

        let category = Category {
            id: self.next_id(),
            name: new.name,
            icon: new.icon,
            color: new.color,
            kind: new.kind,
        };
        tracing::debug!(id = %category.id, name = %category.name, "Category added");
        self.categories.push(category);
        let idx = self.categories.len() - 1;
        Ok(&self.categories[idx])
    }

    /// Set the limit for a category: update the existing row if one exists,
    /// insert otherwise. At most one limit per category.
    pub fn upsert_limit(&mut self, category_id: &str, limit: f64) -> Result<()> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Limit must be positive, got {}",
                limit
            )));
        }

        if let Some(existing) = self
            .limits
            .iter_mut()
            .find(|l| l.category_id == category_id)
        {
            existing.limit = limit;
        } else {
            self.limits.push(BudgetLimit {
                category_id: category_id.to_string(),
                limit,
            });
        }
        tracing::debug!(category_id, limit, "Limit upserted");
        Ok(())
    }

    /// Add a budget plan
    pub fn add_plan(&mut self, new: NewPlan) -> Result<&BudgetPlan> {
        if !new.planned_amount.is_finite() || new.planned_amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Planned amount must be positive, got {}",
                new.planned_amount
            )));
        }
        if new.category_id.is_empty() {
            return Err(Error::InvalidData("Plan must have a category".to_string()));
        }

        let plan = BudgetPlan {
            id: self.next_id(),
            member_id: new.member_id,
            category_id: new.category_id,
            kind: new.kind,
            planned_amount: new.planned_amount,
            month: new.month,
        };
        tracing::debug!(id = %plan.id, month = %plan.month, "Plan added");
        self.plans.push(plan);
        let idx = self.plans.len() - 1;
        Ok(&self.plans[idx])
    }

    /// Delete a plan by id
    pub fn delete_plan(&mut self, id: &str) -> Result<()> {
        let pos = self
            .plans
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("Plan {}", id)))?;
        self.plans.remove(pos);
        tracing::debug!(id, "Plan deleted");
        Ok(())
    }

    /// Add a family member. The avatar glyph follows the role.
    pub fn add_member(&mut self, name: &str, role: MemberRole, color: &str) -> Result<&FamilyMember> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData(
                "Member name must not be empty".to_string(),
            ));
        }

        let member = FamilyMember {
            id: self.next_id(),
            name: name.to_string(),
            role,
            avatar: role.default_avatar().to_string(),
            color: color.to_string(),
        };
        tracing::debug!(id = %member.id, name = %member.name, role = %member.role, "Member added");
        self.members.push(member);
        let idx = self.members.len() - 1;
        Ok(&self.members[idx])
    }
}
