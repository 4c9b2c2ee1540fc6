//! Domain Services
//!
//! Pure functions over expenses: turning raw query parameters into a
//! filter, and rolling a list up into per-category totals.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::domain::entities::Expense;
use crate::domain::value_objects::{Category, parse_date};
use crate::error::{ExpenseError, ExpenseResult};

/// Raw filter parameters as received
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub month: Option<String>,
    pub year: Option<String>,
}

/// Inclusive date range; either end may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// First through last day of a calendar month
    ///
    /// `None` if the month is outside 1-12 or the year is out of range.
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;

        Some(Self {
            start: Some(first),
            end: Some(last),
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }

    /// True when start is after end, so nothing can match
    pub fn is_empty(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }
}

/// Interpreted list filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    /// Exact, case-sensitive match against the stored category. Not
    /// validated; a value no category can have simply matches nothing.
    pub category: Option<String>,
    pub range: DateRange,
}

impl ExpenseFilter {
    /// Interpret raw parameters
    ///
    /// Blank values count as absent. A month/year pair, when both are
    /// given, replaces any start/end dates.
    pub fn from_params(params: FilterParams) -> ExpenseResult<Self> {
        let category = present(params.category).map(|c| c.trim().to_string());

        let range = match (present(params.month), present(params.year)) {
            (Some(month), Some(year)) => month_range(&month, &year)?,
            _ => DateRange {
                start: present(params.start_date)
                    .map(|d| parse_date("startDate", &d))
                    .transpose()?,
                end: present(params.end_date)
                    .map(|d| parse_date("endDate", &d))
                    .transpose()?,
            },
        };

        Ok(Self { category, range })
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| expense.category.as_str() == category)
            && self.range.contains(expense.date)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn month_range(month: &str, year: &str) -> ExpenseResult<DateRange> {
    let invalid = || ExpenseError::Validation("Invalid month or year for report".to_string());

    let month: u32 = month.trim().parse().map_err(|_| invalid())?;
    let year: i32 = year.trim().parse().map_err(|_| invalid())?;

    DateRange::for_month(year, month).ok_or_else(invalid)
}

/// Total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Count and totals over a set of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Decimal,
    /// Sorted by category name
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseSummary {
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut by_category: BTreeMap<&Category, Decimal> = BTreeMap::new();
        for expense in expenses {
            *by_category.entry(&expense.category).or_default() += expense.amount.value();
        }

        let mut total: Decimal = by_category.values().copied().sum();
        total.rescale(2);

        Self {
            count: expenses.len(),
            total,
            by_category: by_category
                .into_iter()
                .map(|(category, mut total)| {
                    total.rescale(2);
                    CategoryTotal {
                        category: category.clone(),
                        total,
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Amount, ExpenseId, UserId};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn params() -> FilterParams {
        FilterParams::default()
    }

    fn expense(id: i64, category: &str, cents: i64, on: NaiveDate) -> Expense {
        let now = Utc::now();
        Expense {
            expense_id: ExpenseId::new(id),
            user_id: UserId::new(1),
            amount: Amount::new(Decimal::new(cents, 2)).unwrap(),
            category: Category::new(category).unwrap(),
            date: on,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_month_range() {
        let feb = DateRange::for_month(2024, 2).unwrap();
        assert_eq!(feb.start, Some(date(2024, 2, 1)));
        assert_eq!(feb.end, Some(date(2024, 2, 29)));

        let dec = DateRange::for_month(2023, 12).unwrap();
        assert_eq!(dec.end, Some(date(2023, 12, 31)));

        assert!(DateRange::for_month(2024, 0).is_none());
        assert!(DateRange::for_month(2024, 13).is_none());
    }

    #[test]
    fn test_no_params_is_unfiltered() {
        let filter = ExpenseFilter::from_params(params()).unwrap();
        assert_eq!(filter, ExpenseFilter::default());
    }

    #[test]
    fn test_blank_params_are_absent() {
        let filter = ExpenseFilter::from_params(FilterParams {
            category: Some("  ".into()),
            start_date: Some("".into()),
            month: Some("".into()),
            year: Some("2024".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(filter, ExpenseFilter::default());
    }

    #[test]
    fn test_month_overrides_dates() {
        let filter = ExpenseFilter::from_params(FilterParams {
            start_date: Some("2020-01-01".into()),
            end_date: Some("2030-01-01".into()),
            month: Some("2".into()),
            year: Some("2024".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(filter.range, DateRange::for_month(2024, 2).unwrap());
    }

    #[test]
    fn test_single_month_or_year_is_ignored() {
        let filter = ExpenseFilter::from_params(FilterParams {
            start_date: Some("2024-03-01".into()),
            month: Some("2".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(filter.range.start, Some(date(2024, 3, 1)));
        assert_eq!(filter.range.end, None);
    }

    #[test]
    fn test_invalid_month_or_year() {
        for (month, year) in [("13", "2024"), ("0", "2024"), ("feb", "2024"), ("2", "abc")] {
            let result = ExpenseFilter::from_params(FilterParams {
                month: Some(month.into()),
                year: Some(year.into()),
                ..params()
            });
            assert!(
                matches!(result, Err(ExpenseError::Validation(_))),
                "{month}/{year}"
            );
        }
    }

    #[test]
    fn test_invalid_start_date() {
        let result = ExpenseFilter::from_params(FilterParams {
            start_date: Some("yesterday".into()),
            ..params()
        });
        assert!(matches!(result, Err(ExpenseError::Validation(_))));
    }

    #[test]
    fn test_open_ranges() {
        let from = DateRange {
            start: Some(date(2024, 2, 10)),
            end: None,
        };
        assert!(from.contains(date(2024, 2, 10)));
        assert!(from.contains(date(2030, 1, 1)));
        assert!(!from.contains(date(2024, 2, 9)));

        let until = DateRange {
            start: None,
            end: Some(date(2024, 2, 10)),
        };
        assert!(until.contains(date(2024, 2, 10)));
        assert!(!until.contains(date(2024, 2, 11)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange {
            start: Some(date(2024, 3, 1)),
            end: Some(date(2024, 2, 1)),
        };
        assert!(range.is_empty());
        assert!(!range.contains(date(2024, 2, 15)));
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let filter = ExpenseFilter::from_params(FilterParams {
            category: Some("Food".into()),
            ..params()
        })
        .unwrap();

        assert!(filter.matches(&expense(1, "Food", 100, date(2024, 1, 1))));
        assert!(!filter.matches(&expense(2, "food", 100, date(2024, 1, 1))));
    }

    #[test]
    fn test_category_filter_is_trimmed_not_validated() {
        let filter = ExpenseFilter::from_params(FilterParams {
            category: Some(" Food ".into()),
            ..params()
        })
        .unwrap();
        assert_eq!(filter.category.as_deref(), Some("Food"));

        let too_long = ExpenseFilter::from_params(FilterParams {
            category: Some("x".repeat(101)),
            ..params()
        })
        .unwrap();
        assert!(!too_long.matches(&expense(1, "Food", 100, date(2024, 1, 1))));
    }

    #[test]
    fn test_summary() {
        let expenses = vec![
            expense(1, "Food", 1250, date(2024, 2, 1)),
            expense(2, "Travel", 5000, date(2024, 2, 2)),
            expense(3, "Food", 250, date(2024, 2, 3)),
        ];
        let summary = ExpenseSummary::from_expenses(&expenses);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total.to_string(), "65.00");
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category.as_str(), "Food");
        assert_eq!(summary.by_category[0].total.to_string(), "15.00");
        assert_eq!(summary.by_category[1].category.as_str(), "Travel");
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExpenseSummary::from_expenses(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total.to_string(), "0.00");
        assert!(summary.by_category.is_empty());
    }
}
