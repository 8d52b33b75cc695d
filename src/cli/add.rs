//! Add-expense CLI command
//!
//! Collects the form fields (amount text, date, category), runs them through
//! validation, and on acceptance appends to the store and re-renders the
//! report. A rejection reaches the user as the command's error; no record is
//! appended.

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_report;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::query::{evaluate, Query};
use crate::store::ExpenseStore;
use crate::validate::{validate, ValidationOutcome};

use super::parse_date;

/// Arguments for the `add` command
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount in dollars (e.g. "34.08")
    pub amount: String,

    /// Spending category (Food, Entertainment, Transportation)
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Handle the `add` command
pub fn handle_add_command(
    store: &mut ExpenseStore,
    args: AddArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    // A stored record needs a concrete category; the wildcard is not one
    let category = Category::from_label(&args.category)
        .ok_or_else(|| ExpenseError::UnknownCategory(args.category.clone()))?;

    let date = match &args.date {
        Some(s) => parse_date(s)?,
        None => today,
    };

    match validate(&args.amount, date, category, today) {
        ValidationOutcome::Accepted(record) => {
            store.append(record);
            // Successful entry refreshes the view with the default query
            let result = evaluate(store.records(), &Query::default(), today);
            print!("{}", format_report(&result));
            Ok(())
        }
        ValidationOutcome::Rejected(reason) => Err(ExpenseError::validation(reason.to_string())),
    }
}
