//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the query engine and validator.

pub mod add;
pub mod report;

pub use add::{handle_add_command, AddArgs};
pub use report::{handle_report_command, ReportArgs};

use chrono::{Duration, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, ExpenseRecord, Money};
use crate::store::ExpenseStore;

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ExpenseError::InvalidDate(s.to_string()))
}

/// Build the session's expense store
///
/// Persistence is out of scope, so each invocation starts from the built-in
/// sample data set and grows only by appends made during the session.
pub fn sample_store(today: NaiveDate) -> ExpenseStore {
    let days_ago = |n: i64| today - Duration::days(n);
    let expense = |cents: i64, date: NaiveDate, category: Category| {
        ExpenseRecord::new(Money::from_cents(cents), date, category)
    };

    ExpenseStore::from_records(vec![
        expense(4031, today, Category::Transportation),
        expense(3408, today, Category::Food),
        expense(12345, days_ago(10), Category::Entertainment),
        expense(2395, days_ago(5), Category::Food),
        expense(5543, days_ago(50), Category::Entertainment),
        expense(10549, days_ago(3), Category::Transportation),
        expense(9905, days_ago(405), Category::Food),
        expense(120000, days_ago(20), Category::Transportation),
        expense(3842, days_ago(100), Category::Food),
        expense(4336, days_ago(14), Category::Food),
    ])
}
