//! Calendar dates as entered at the prompt
//!
//! Dates are kept as plain year/month/day triples rather than a calendar type
//! because validation is deliberately loose: February always accepts the 29th
//! and no leap-year check is made. The zero value (year 0) is the "not
//! supplied" sentinel produced by optional date prompts.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Earliest year accepted by the date prompts
pub const MIN_YEAR: i32 = 2020;

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year/month/day triple, `YYYY-MM-DD` when displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// The "not supplied" sentinel
    pub const ZERO: Date = Date {
        year: 0,
        month: 0,
        day: 0,
    };

    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn is_zero(&self) -> bool {
        self.year == 0
    }

    /// `None` for the zero sentinel, for storing as a nullable column
    pub fn non_zero(self) -> Option<Self> {
        (!self.is_zero()).then_some(self)
    }

    /// Largest valid day of `month`, with February fixed at 29
    pub fn days_in_month(month: u32) -> Option<u32> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        DAYS_IN_MONTH.get(index).copied()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Raised when a stored date string is not `YYYY-MM-DD`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a YYYY-MM-DD date")]
pub struct DateParseError(pub String);

impl FromStr for Date {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateParseError(s.to_string());

        let mut parts = s.trim().splitn(3, '-');
        let mut next = || parts.next().ok_or_else(invalid);
        let year = next()?.parse::<i32>().map_err(|_| invalid())?;
        let month = next()?.parse::<u32>().map_err(|_| invalid())?;
        let day = next()?.parse::<u32>().map_err(|_| invalid())?;

        Ok(Self::new(year, month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn formats_with_padding() {
        assert_eq!(Date::new(2023, 4, 7).to_string(), "2023-04-07");
        assert_eq!(Date::new(2021, 12, 31).to_string(), "2021-12-31");
    }

    #[test]
    fn parses_stored_form() {
        assert_eq!("2023-04-07".parse::<Date>().unwrap(), Date::new(2023, 4, 7));
        assert_eq!("2022-1-3".parse::<Date>().unwrap(), Date::new(2022, 1, 3));
    }

    #[test_case("2023-04" ; "missing day")]
    #[test_case("2023-xx-01" ; "non numeric month")]
    #[test_case("" ; "empty")]
    fn rejects_malformed(input: &str) {
        assert!(input.parse::<Date>().is_err());
    }

    #[test_case(1, Some(31))]
    #[test_case(2, Some(29))]
    #[test_case(4, Some(30))]
    #[test_case(12, Some(31))]
    #[test_case(0, None)]
    #[test_case(13, None)]
    fn month_lengths(month: u32, expected: Option<u32>) {
        assert_eq!(Date::days_in_month(month), expected);
    }

    #[test]
    fn zero_is_not_supplied() {
        assert!(Date::ZERO.is_zero());
        assert_eq!(Date::default(), Date::ZERO);
        assert_eq!(Date::ZERO.non_zero(), None);
        assert_eq!(Date::new(2024, 2, 29).non_zero(), Some(Date::new(2024, 2, 29)));
    }

    #[test]
    fn converts_from_chrono() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(Date::from(naive), Date::new(2024, 3, 9));
    }
}
