use chrono::{Datelike, NaiveDate};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month, addressed as `YYYY-MM` in the API.
///
/// Internally stored as the first day of the month, so the usual date
/// comparisons and hashing come for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NaiveDate);

impl Month {
    /// Create a month from a year and a 1-based month number.
    ///
    /// Returns `None` when the month number is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Month)
    }

    /// Month containing the given date.
    pub fn containing(date: NaiveDate) -> Self {
        // day 1 of the date's own month always exists
        Month(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    /// Last calendar day of the month (handles leap years).
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.0.month() == 12 {
            (self.0.year() + 1, 1)
        } else {
            (self.0.year(), self.0.month() + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.0)
    }

    /// Iterate over every calendar day of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        days_inclusive(self.first_day(), self.last_day())
    }

    /// Check whether a date falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.0.year() && date.month() == self.0.month()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.0.year(), self.0.month())
    }
}

impl FromStr for Month {
    type Err = String;

    /// Parse a `YYYY-MM` month string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid month format: {}", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid month format: {}", s))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month format: {}", s))?;
        Month::new(year, month).ok_or_else(|| format!("Month out of range: {}", s))
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Iterate over every calendar day from `start` to `end` inclusive.
///
/// Yields nothing when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}
