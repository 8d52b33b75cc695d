//! Expense record model
//!
//! An expense is an immutable value: once admitted through validation it is
//! never edited or deleted. Records are interchangeable by value for display
//! purposes; the id exists for stable list diffing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::category::Category;
use super::money::Money;

/// Unique identifier for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exp-{}", &self.0.to_string()[..8])
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (strictly positive once admitted)
    pub amount: Money,

    /// The calendar day the expense occurred
    pub date: NaiveDate,

    /// Spending category (always a concrete category, never a wildcard)
    pub category: Category,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(amount: Money, date: NaiveDate, category: Category) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            category,
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}
