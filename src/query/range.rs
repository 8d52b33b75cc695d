//! Date-range resolution
//!
//! Turns a relative range selector ("past week", "past month", ...) into a
//! concrete inclusive [start, end] interval anchored on a given day.
//! Month and year steps use calendar arithmetic, so subtracting a month from
//! 2021-03-31 lands on 2021-02-28 rather than crashing or drifting.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative date-range selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeSelector {
    /// The past day
    #[default]
    Day,
    /// The past 7 days
    Week,
    /// The past calendar month
    Month,
    /// The past calendar year
    Year,
    /// A caller-supplied explicit interval
    Custom,
}

impl RangeSelector {
    /// All selector options, in the order a picker presents them
    pub const ALL: [RangeSelector; 5] = [
        RangeSelector::Day,
        RangeSelector::Week,
        RangeSelector::Month,
        RangeSelector::Year,
        RangeSelector::Custom,
    ];

    /// Get the display label for this selector option
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Today",
            Self::Week => "Past week",
            Self::Month => "Past month",
            Self::Year => "Past year",
            Self::Custom => "Custom",
        }
    }

    /// Resolve this selector into a concrete interval ending at `anchor`
    ///
    /// `Custom` is not resolved from the anchor; callers supply an explicit
    /// interval instead. Resolving it anyway yields the same defaults used
    /// to seed a custom-range picker (see [`DateInterval::default_custom`]).
    ///
    /// If the calendar arithmetic underflows the minimum representable date,
    /// the start falls back to the anchor itself. Resolution never fails.
    pub fn resolve(&self, anchor: NaiveDate) -> DateInterval {
        let start = match self {
            Self::Day | Self::Custom => anchor.checked_sub_days(Days::new(1)),
            Self::Week => anchor.checked_sub_days(Days::new(7)),
            Self::Month => anchor.checked_sub_months(Months::new(1)),
            Self::Year => anchor.checked_sub_months(Months::new(12)),
        };

        DateInterval {
            start: start.unwrap_or(anchor),
            end: anchor,
        }
    }
}

impl fmt::Display for RangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An inclusive calendar-day interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateInterval {
    /// Create an interval from explicit bounds
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Default bounds for initializing a custom-range picker:
    /// start = anchor - 1 day, end = anchor
    pub fn default_custom(anchor: NaiveDate) -> Self {
        RangeSelector::Day.resolve(anchor)
    }

    /// Check if a date falls within this interval, inclusive on both ends
    ///
    /// An inverted interval (start > end) contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
