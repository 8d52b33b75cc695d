//! Report display formatting
//!
//! Renders a query result as a terminal table: one row per expense
//! (category, date, amount) and a total footer.

use crate::models::ExpenseRecord;
use crate::query::QueryResult;

/// Format a single expense as a report row
pub fn format_expense_row(expense: &ExpenseRecord) -> String {
    format!(
        "{:<16} {:>10} {:>12}",
        expense.category.label(),
        expense.date.format("%Y-%m-%d"),
        expense.amount.to_string()
    )
}

/// Format a full query result: header, rows, and the total footer
pub fn format_report(result: &QueryResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<16} {:>10} {:>12}\n",
        "Category", "Date", "Amount"
    ));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if result.rows.is_empty() {
        output.push_str("No expenses found.\n");
    } else {
        for expense in &result.rows {
            output.push_str(&format_expense_row(expense));
            output.push('\n');
        }
    }

    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("Total = {}\n", result.total));

    output
}
