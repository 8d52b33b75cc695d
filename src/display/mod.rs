//! Display formatting for terminal output
//!
//! Provides utilities for formatting query results for terminal display.

pub mod report;

pub use report::{format_expense_row, format_report};
