//! Month keys and calendar helpers.
//!
//! A month key is the `"{year}-{month}"` string (month 1-based, no leading
//! zero) that scopes one habit list in storage.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Years a month key may name: four digits.
const YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Calendar month identifying one stored habit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// # Errors
    /// Returns [`ValidationError::InvalidMonthKey`] unless `year` has four
    /// digits and `month` is 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, ValidationError> {
        if !YEARS.contains(&year) || !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidMonthKey(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    /// May 2025, the month the built-in habits belong to.
    pub(crate) const fn seed() -> Self {
        Self {
            year: 2025,
            month: 5,
        }
    }

    /// Month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Month containing today on the local clock.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Key under which this month's habits are persisted.
    pub fn storage_key(&self) -> String {
        format!("habits-{self}")
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    fn first_day(&self) -> NaiveDate {
        // Validated in every constructor.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Always 28-31, whatever the year.
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year() => 29,
            2 => 28,
            _ => 31,
        }
    }

    fn is_leap_year(&self) -> bool {
        (self.year % 4 == 0 && self.year % 100 != 0) || self.year % 400 == 0
    }

    /// Day numbers `1..=days_in_month`.
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month()
    }

    pub fn contains_day(&self, day: u32) -> bool {
        (1..=self.days_in_month()).contains(&day)
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Three-letter weekday (`"Sun"`..`"Sat"`) for `day`, if it exists.
    pub fn weekday_abbrev(&self, day: u32) -> Option<&'static str> {
        const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let date = self.date(day)?;
        Some(DAYS[date.weekday().num_days_from_sunday() as usize])
    }

    /// `today`'s day of month placed in this month, clamped to its last day.
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        let day = today.day().min(self.days_in_month());
        self.date(day).unwrap_or_else(|| self.first_day())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidMonthKey(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}
