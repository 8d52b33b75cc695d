//! End-to-end tests for the `outlay` binary
//!
//! The binary seeds the built-in sample data set, so row membership and
//! totals are deterministic relative to the current day.

use assert_cmd::Command;
use predicates::prelude::*;

fn outlay() -> Command {
    Command::cargo_bin("outlay").unwrap()
}

#[test]
fn report_defaults_to_today_grouped_by_category() {
    // Only the two same-day sample expenses fall inside the default range
    outlay()
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Transportation"))
        .stdout(predicate::str::contains("Total = $74.39"));
}

#[test]
fn report_week_range_widens_the_window() {
    outlay()
        .args(["report", "--range", "week"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total = $203.83"));
}

#[test]
fn report_category_filter_excludes_other_categories() {
    outlay()
        .args(["report", "--range", "year", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total = $139.81"))
        .stdout(predicate::str::contains("Transportation").not());
}

#[test]
fn report_unknown_category_label_means_no_filter() {
    // An unrecognized label degrades to "All" rather than erroring
    outlay()
        .args(["report", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total = $74.39"));
}

#[test]
fn report_inverted_custom_range_is_empty() {
    outlay()
        .args([
            "report", "--range", "custom", "--from", "2020-01-02", "--to", "2020-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."))
        .stdout(predicate::str::contains("Total = $0.00"));
}

#[test]
fn report_rejects_unknown_range() {
    outlay()
        .args(["report", "--range", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown range"));
}

#[test]
fn add_valid_expense_prints_refreshed_report() {
    outlay()
        .args(["add", "12.50", "--category", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12.50"))
        .stdout(predicate::str::contains("Total = $86.89"));
}

#[test]
fn add_rejects_zero_amount() {
    outlay()
        .args(["add", "0", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be greater than zero"));
}

#[test]
fn add_rejects_non_numeric_amount() {
    outlay()
        .args(["add", "abc", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount is not a number"));
}

#[test]
fn add_rejects_future_date() {
    outlay()
        .args(["add", "5.00", "--category", "Food", "--date", "2999-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("date must not be in the future"));
}

#[test]
fn add_rejects_wildcard_category() {
    outlay()
        .args(["add", "5.00", "--category", "All"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: All"));
}
