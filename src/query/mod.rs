//! Query layer for Outlay
//!
//! Resolves relative date ranges into concrete intervals and evaluates
//! queries (category filter, date window, grouping key) against the
//! expense collection.

pub mod engine;
pub mod range;

pub use engine::{evaluate, Grouping, Query, QueryResult};
pub use range::{DateInterval, RangeSelector};
