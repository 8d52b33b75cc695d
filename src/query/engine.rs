//! Expense query engine
//!
//! Evaluates a query against a snapshot of the expense store: category
//! filter, date window, stable sort by the grouping key, and an exact total
//! over the rows that remain. Pure and idempotent; a malformed query
//! degrades to an unfiltered or empty result, never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CategoryFilter, ExpenseRecord, Money};

use super::range::{DateInterval, RangeSelector};

/// Sort key applied to the filtered rows
///
/// Sorting by category keeps equal-category rows contiguous, which is the
/// only grouping the report has; there are no bucketed subtotals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Ascending chronological order
    Date,
    /// Ascending numeric order
    Amount,
    /// Ascending lexicographic order on the category display label
    #[default]
    Category,
}

/// A description of what the caller wants to see
///
/// Queries are transient: one is built per user interaction and evaluated
/// once. `custom` only takes effect when `range` is [`RangeSelector::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Category selection
    pub category: CategoryFilter,
    /// Relative date-range selector
    pub range: RangeSelector,
    /// Explicit interval for the custom range
    pub custom: Option<DateInterval>,
    /// Sort key for the rows
    pub grouping: Grouping,
}

impl Query {
    /// Create a new query with no custom interval
    pub fn new(category: CategoryFilter, range: RangeSelector, grouping: Grouping) -> Self {
        Self {
            category,
            range,
            custom: None,
            grouping,
        }
    }

    /// Set an explicit interval for the custom range
    pub fn with_custom_interval(mut self, interval: DateInterval) -> Self {
        self.custom = Some(interval);
        self
    }

    /// The interval this query covers, anchored on `today`
    ///
    /// A custom selector uses the caller-supplied interval verbatim, falling
    /// back to the picker defaults when none was supplied; every other
    /// selector resolves relative to `today`.
    pub fn effective_interval(&self, today: NaiveDate) -> DateInterval {
        match self.range {
            RangeSelector::Custom => self
                .custom
                .unwrap_or_else(|| DateInterval::default_custom(today)),
            selector => selector.resolve(today),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new(
            CategoryFilter::All,
            RangeSelector::default(),
            Grouping::default(),
        )
    }
}

/// The outcome of evaluating a query: display-ready rows and their total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Filtered rows, sorted per the query's grouping key
    pub rows: Vec<ExpenseRecord>,
    /// Sum of the amounts over `rows`; zero when `rows` is empty
    pub total: Money,
}

/// Evaluate a query against a snapshot of the expense collection
///
/// `today` is the anchor for relative ranges, passed in so the engine stays
/// a pure function of its inputs. The returned rows are a fresh sequence;
/// the store is never aliased or mutated. Ties within a sort key preserve
/// insertion order.
pub fn evaluate(expenses: &[ExpenseRecord], query: &Query, today: NaiveDate) -> QueryResult {
    let interval = query.effective_interval(today);

    let mut rows: Vec<ExpenseRecord> = expenses
        .iter()
        .filter(|e| query.category.matches(e.category))
        .filter(|e| interval.contains(e.date))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so equal keys keep their relative order
    match query.grouping {
        Grouping::Amount => rows.sort_by_key(|e| e.amount),
        Grouping::Date => rows.sort_by_key(|e| e.date),
        Grouping::Category => rows.sort_by(|a, b| a.category.label().cmp(b.category.label())),
    }

    let total = rows.iter().map(|e| e.amount).sum();

    QueryResult { rows, total }
}
