use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthKeyError {
    #[error("Expected [year, month], got {0}")]
    Shape(String),
    #[error("Month {0} is outside 1..=12")]
    MonthOutOfRange(i64),
    #[error("Year {0} cannot be represented")]
    YearOutOfRange(i64),
}

/// A `(year, month)` pair identifying one calendar page.
///
/// Only constructible for real months, so the first day of the month always
/// exists and the grid builder stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    first_day: NaiveDate,
}

impl MonthKey {
    pub fn new(year: i64, month: i64) -> Result<Self, MonthKeyError> {
        if !(1..=12).contains(&month) {
            return Err(MonthKeyError::MonthOutOfRange(month));
        }
        let year_i32 = i32::try_from(year).map_err(|_| MonthKeyError::YearOutOfRange(year))?;
        let first_day = NaiveDate::from_ymd_opt(year_i32, month as u32, 1)
            .ok_or(MonthKeyError::YearOutOfRange(year))?;
        Ok(Self { first_day })
    }

    /// Accepts the `[year, month]` array form used by `displayedMonths`.
    pub fn from_json(value: &Value) -> Result<Self, MonthKeyError> {
        let parts = match value.as_array() {
            Some(parts) if parts.len() == 2 => parts,
            _ => return Err(MonthKeyError::Shape(value.to_string())),
        };
        let (Some(year), Some(month)) = (parts[0].as_i64(), parts[1].as_i64()) else {
            return Err(MonthKeyError::Shape(value.to_string()));
        };
        Self::new(year, month)
    }

    /// Parses `YYYY-MM`, the form used on the command line.
    pub fn parse(input: &str) -> Result<Self, MonthKeyError> {
        let shape_error = || MonthKeyError::Shape(input.to_string());
        let (year, month) = input.trim().split_once('-').ok_or_else(shape_error)?;
        let year = year.parse::<i64>().map_err(|_| shape_error())?;
        let month = month.parse::<i64>().map_err(|_| shape_error())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn days_in_month(&self) -> u32 {
        let next_month_first = if self.month() == 12 {
            NaiveDate::from_ymd_opt(self.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year(), self.month() + 1, 1)
        };

        // December of the last representable year has no successor month.
        next_month_first
            .and_then(|d| d.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// The exact string events are matched against for `day`.
    pub fn date_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), day)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
