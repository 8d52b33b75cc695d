//! New-expense validation
//!
//! The gate every candidate expense passes before it may be appended to the
//! store: the amount text must parse as a decimal number, the parsed amount
//! must be strictly positive, and the date must not be in the future. The
//! validator itself has no side effects; the caller appends the accepted
//! record and surfaces the rejection reason on failure.

use chrono::NaiveDate;
use std::fmt;

use crate::models::{Category, ExpenseRecord, Money};

/// Why a candidate expense was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The amount text did not parse as a decimal number.
    /// By convention this is equivalent to an amount of zero; it carries its
    /// own reason so the message can name the actual problem.
    NotANumber,
    /// The parsed amount was zero or negative
    NotPositive,
    /// The date lies after the current day
    FutureDate,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "amount is not a number"),
            Self::NotPositive => write!(f, "amount must be greater than zero"),
            Self::FutureDate => write!(f, "date must not be in the future"),
        }
    }
}

/// The outcome of validating a candidate expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The candidate was admitted; the record is ready to append
    Accepted(ExpenseRecord),
    /// The candidate was refused; no record is created
    Rejected(RejectReason),
}

impl ValidationOutcome {
    /// Check if the candidate was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Validate a candidate expense
///
/// `today` is the reference day for the future-date check, passed in so the
/// validator stays a pure function. Checks run in order: amount parse,
/// amount positivity, then date.
pub fn validate(
    amount_text: &str,
    date: NaiveDate,
    category: Category,
    today: NaiveDate,
) -> ValidationOutcome {
    let amount = match Money::parse(amount_text) {
        Ok(amount) => amount,
        Err(_) => return ValidationOutcome::Rejected(RejectReason::NotANumber),
    };

    if !amount.is_positive() {
        return ValidationOutcome::Rejected(RejectReason::NotPositive);
    }

    if date > today {
        return ValidationOutcome::Rejected(RejectReason::FutureDate);
    }

    ValidationOutcome::Accepted(ExpenseRecord::new(amount, date, category))
}
