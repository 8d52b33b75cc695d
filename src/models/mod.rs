//! Core data models for Outlay
//!
//! This module contains the data structures that represent the expense
//! domain: monetary amounts, the closed category set, and expense records.

pub mod category;
pub mod expense;
pub mod money;

pub use category::{Category, CategoryFilter, WILDCARD_LABEL};
pub use expense::{ExpenseId, ExpenseRecord};
pub use money::Money;
