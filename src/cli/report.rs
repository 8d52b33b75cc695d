//! Report CLI command
//!
//! Collects the query parameters (category label, range selector, custom
//! bounds, grouping key), evaluates one query, and renders the result.

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_report;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CategoryFilter;
use crate::query::{evaluate, DateInterval, Grouping, Query, RangeSelector};
use crate::store::ExpenseStore;

use super::parse_date;

/// Arguments for the `report` command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Category to filter by (Food, Entertainment, Transportation, or All)
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Date range: today, week, month, year, or custom
    #[arg(short, long, default_value = "today")]
    pub range: String,

    /// Custom range start (YYYY-MM-DD); only used with --range custom
    #[arg(long)]
    pub from: Option<String>,

    /// Custom range end (YYYY-MM-DD); only used with --range custom
    #[arg(long)]
    pub to: Option<String>,

    /// Sort key for the rows: date, amount, or category
    #[arg(short, long, default_value = "category")]
    pub group: String,
}

/// Handle the `report` command
pub fn handle_report_command(
    store: &ExpenseStore,
    args: ReportArgs,
    today: NaiveDate,
) -> ExpenseResult<()> {
    let query = build_query(&args, today)?;
    let result = evaluate(store.records(), &query, today);
    print!("{}", format_report(&result));
    Ok(())
}

/// Turn report arguments into a query
pub(crate) fn build_query(args: &ReportArgs, today: NaiveDate) -> ExpenseResult<Query> {
    let range = parse_range(&args.range)?;
    let grouping = parse_grouping(&args.group)?;

    // Labels that name no concrete category (including "All") mean no filter
    let mut query = Query::new(CategoryFilter::from_label(&args.category), range, grouping);

    if range == RangeSelector::Custom {
        let defaults = DateInterval::default_custom(today);
        let start = match &args.from {
            Some(s) => parse_date(s)?,
            None => defaults.start,
        };
        let end = match &args.to {
            Some(s) => parse_date(s)?,
            None => defaults.end,
        };
        query = query.with_custom_interval(DateInterval::new(start, end));
    }

    Ok(query)
}

fn parse_range(s: &str) -> ExpenseResult<RangeSelector> {
    match s.to_ascii_lowercase().as_str() {
        "today" | "day" => Ok(RangeSelector::Day),
        "week" => Ok(RangeSelector::Week),
        "month" => Ok(RangeSelector::Month),
        "year" => Ok(RangeSelector::Year),
        "custom" => Ok(RangeSelector::Custom),
        _ => Err(ExpenseError::validation(format!(
            "Unknown range '{}'. Use today, week, month, year, or custom",
            s
        ))),
    }
}

fn parse_grouping(s: &str) -> ExpenseResult<Grouping> {
    match s.to_ascii_lowercase().as_str() {
        "date" => Ok(Grouping::Date),
        "amount" => Ok(Grouping::Amount),
        "category" => Ok(Grouping::Category),
        _ => Err(ExpenseError::validation(format!(
            "Unknown sort key '{}'. Use date, amount, or category",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn args(category: &str, range: &str, group: &str) -> ReportArgs {
        ReportArgs {
            category: category.into(),
            range: range.into(),
            from: None,
            to: None,
            group: group.into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 9, 8).unwrap()
    }

    #[test]
    fn test_build_query_defaults() {
        let query = build_query(&args("All", "today", "category"), today()).unwrap();
        assert_eq!(query.category, CategoryFilter::All);
        assert_eq!(query.range, RangeSelector::Day);
        assert_eq!(query.grouping, Grouping::Category);
        assert!(query.custom.is_none());
    }

    #[test]
    fn test_build_query_concrete_category() {
        let query = build_query(&args("Food", "week", "amount"), today()).unwrap();
        assert_eq!(query.category, CategoryFilter::Only(Category::Food));
        assert_eq!(query.range, RangeSelector::Week);
        assert_eq!(query.grouping, Grouping::Amount);
    }

    #[test]
    fn test_build_query_unknown_category_means_no_filter() {
        let query = build_query(&args("Groceries", "month", "date"), today()).unwrap();
        assert_eq!(query.category, CategoryFilter::All);
    }

    #[test]
    fn test_build_query_custom_bounds() {
        let mut a = args("All", "custom", "date");
        a.from = Some("2021-09-01".into());
        a.to = Some("2021-09-05".into());
        let query = build_query(&a, today()).unwrap();

        let interval = query.custom.unwrap();
        assert_eq!(interval.start, NaiveDate::from_ymd_opt(2021, 9, 1).unwrap());
        assert_eq!(interval.end, NaiveDate::from_ymd_opt(2021, 9, 5).unwrap());
    }

    #[test]
    fn test_build_query_custom_defaults_seed_the_picker() {
        let query = build_query(&args("All", "custom", "date"), today()).unwrap();
        assert_eq!(query.custom.unwrap(), DateInterval::default_custom(today()));
    }

    #[test]
    fn test_build_query_rejects_unknown_range() {
        assert!(build_query(&args("All", "fortnight", "date"), today()).is_err());
    }

    #[test]
    fn test_build_query_rejects_unknown_grouping() {
        assert!(build_query(&args("All", "week", "name"), today()).is_err());
    }

    #[test]
    fn test_build_query_rejects_malformed_custom_date() {
        let mut a = args("All", "custom", "date");
        a.from = Some("last tuesday".into());
        assert!(matches!(
            build_query(&a, today()),
            Err(ExpenseError::InvalidDate(_))
        ));
    }
}
