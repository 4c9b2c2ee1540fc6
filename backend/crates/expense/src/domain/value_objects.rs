//! Domain Value Objects
//!
//! Validated scalar types for the expense domain. Constructors normalise
//! their input and fail with `ExpenseError::Validation`.

use chrono::{DateTime, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

pub use kernel::id::{ExpenseId, UserId};

/// Largest value a `NUMERIC(10,2)` column holds, in cents
const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

/// Maximum category length in characters
pub const CATEGORY_MAX_LENGTH: usize = 100;

/// Positive money amount with exactly two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Round half away from zero to cents, then range-check
    pub fn new(value: Decimal) -> ExpenseResult<Self> {
        let mut value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(2);

        if value <= Decimal::ZERO {
            return Err(ExpenseError::Validation(
                "Amount must be greater than 0".to_string(),
            ));
        }
        if value > Decimal::new(MAX_AMOUNT_CENTS, 2) {
            return Err(ExpenseError::Validation(
                "Amount must not exceed 99999999.99".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form expense category, trimmed, case preserved
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(input: impl AsRef<str>) -> ExpenseResult<Self> {
        let trimmed = input.as_ref().trim();

        if trimmed.is_empty() {
            return Err(ExpenseError::Validation("Category is required".to_string()));
        }
        if trimmed.chars().count() > CATEGORY_MAX_LENGTH {
            return Err(ExpenseError::Validation(format!(
                "Category must be at most {} characters",
                CATEGORY_MAX_LENGTH
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a calendar date given as `YYYY-MM-DD` or an RFC 3339 timestamp
///
/// For a timestamp the date part is taken as written; no timezone shift.
pub fn parse_date(field: &str, input: &str) -> ExpenseResult<NaiveDate> {
    let input = input.trim();

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(input).map(|dt| dt.date_naive()))
        .map_err(|_| ExpenseError::Validation(format!("Invalid {}: {}", field, input)))
}

/// Trim a description; blank means none
pub fn normalize_description(input: Option<String>) -> Option<String> {
    input
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_amount_boundaries() {
        assert!(Amount::new(dec("0")).is_err());
        assert!(Amount::new(dec("-5")).is_err());
        assert!(Amount::new(dec("0.004")).is_err());
        assert_eq!(Amount::new(dec("0.01")).unwrap().value(), dec("0.01"));
        assert!(Amount::new(dec("99999999.99")).is_ok());
        assert!(Amount::new(dec("100000000")).is_err());
    }

    #[test]
    fn test_amount_rounds_to_cents() {
        assert_eq!(Amount::new(dec("12.5")).unwrap().to_string(), "12.50");
        assert_eq!(Amount::new(dec("0.005")).unwrap().to_string(), "0.01");
        assert_eq!(Amount::new(dec("3.14159")).unwrap().to_string(), "3.14");
        assert_eq!(Amount::new(dec("7")).unwrap().to_string(), "7.00");
    }

    #[test]
    fn test_category() {
        assert_eq!(Category::new("  Food ").unwrap().as_str(), "Food");
        assert!(Category::new("").is_err());
        assert!(Category::new("   ").is_err());
        assert!(Category::new("a".repeat(100)).is_ok());
        assert!(Category::new("a".repeat(101)).is_err());
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        assert_eq!(parse_date("date", "2024-02-10").unwrap(), expected);
        assert_eq!(parse_date("date", " 2024-02-10 ").unwrap(), expected);
        assert_eq!(parse_date("date", "2024-02-10T23:30:00+09:00").unwrap(), expected);
        assert_eq!(parse_date("date", "2024-02-10T00:00:00.000Z").unwrap(), expected);

        assert!(parse_date("date", "2024-02-30").is_err());
        assert!(parse_date("date", "10/02/2024").is_err());
        assert!(parse_date("date", "").is_err());
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(normalize_description(None), None);
        assert_eq!(normalize_description(Some("   ".into())), None);
        assert_eq!(normalize_description(Some(" lunch ".into())), Some("lunch".into()));
    }
}
