//! Outlay - Terminal-based personal expense tracker
//!
//! This library provides the core of the Outlay expense tracker: a list of
//! dated, categorized monetary transactions, a query engine that filters,
//! sorts, and totals them for display, and the validation rule applied when
//! a new expense is entered.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expense records)
//! - `store`: The in-memory expense collection
//! - `query`: Date-range resolution and the query engine
//! - `validate`: New-expense validation
//! - `display`: Terminal report formatting
//! - `cli`: Command handlers for the `outlay` binary
//!
//! # Example
//!
//! ```rust
//! use outlay::models::CategoryFilter;
//! use outlay::query::{evaluate, Grouping, Query, RangeSelector};
//! use outlay::store::ExpenseStore;
//!
//! let store = ExpenseStore::new();
//! let query = Query::new(CategoryFilter::All, RangeSelector::Week, Grouping::Category);
//! let today = chrono::Local::now().date_naive();
//! let result = evaluate(store.records(), &query, today);
//! assert!(result.rows.is_empty());
//! assert!(result.total.is_zero());
//! ```

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod query;
pub mod store;
pub mod validate;

pub use error::{ExpenseError, ExpenseResult};
