// SPDX-License-Identifier: MIT

//!
//! The calendar-day date type
//!

use crate::DisplayedMonth;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The minimum year allowed
pub const MIN_YEAR: i64 = -50000;

/// The maximum year allowed
pub const MAX_YEAR: i64 = 10000;

/// Long month names, indexed by the 0-based month index
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The day number does not exist in the month
    #[error("Day `{day}` is not allowed (the month has {days_in_month} days)")]
    InvalidDay { day: i64, days_in_month: u8 },

    /// The month index is not allowed (must be 0 <= month <= 11)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),
}

/// The day of the month (1 <= day <= 31)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The month, held as a 0-based index (January = 0, December = 11)
#[derive(Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The year
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

/// Day of the week, numbered from the first column of the grid (Sunday = 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub const JANUARY: Month = Month(0);
    pub const DECEMBER: Month = Month(11);

    /// The 0-based month index
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The 1-based month number (January = 1)
    pub fn number(&self) -> u8 {
        self.0 + 1
    }

    /// e.g. "March"
    pub fn long_name(&self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    /// e.g. "Mar"
    pub fn short_name(&self) -> &'static str {
        &MONTH_NAMES[self.0 as usize][..3]
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }

    pub fn is_leap(&self) -> bool {
        is_leap_year(self.0)
    }
}

impl Weekday {
    /// Column index in the grid (Sunday = 0, Saturday = 6)
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.long_name())
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=11).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in the month, i.e. the last valid day of the month
pub fn days_in_month(year: Year, month: Month) -> u8 {
    match month.number() {
        4 | 6 | 9 | 11 => 30,
        2 if year.is_leap() => 29,
        2 => 28,
        _ => 31,
    }
}

/// A calendar day between the 1st of January [`MIN_YEAR`] and the 31st of
/// December [`MAX_YEAR`].  Ordering is chronological and equality is by
/// calendar day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Create a new [`Date`] if the result will be valid.  The month is the
    /// 0-based index.
    pub fn from(year: i64, month: i64, day: i64) -> Result<Date, DateError> {
        let year = Year::try_from(year)?;
        let month = Month::try_from(month)?;
        Date::new(year, month, day)
    }

    /// Create a new [`Date`] from an already valid year and month
    pub fn new(year: Year, month: Month, day: i64) -> Result<Date, DateError> {
        let days_in_month = days_in_month(year, month);
        let invalid_day = DateError::InvalidDay { day, days_in_month };
        if !(1..=i64::from(days_in_month)).contains(&day) {
            return Err(invalid_day);
        }
        NaiveDate::from_ymd_opt(year.0, u32::from(month.number()), day as u32)
            .map(Date)
            .ok_or(invalid_day)
    }

    /// Only keep dates within the allowed years
    fn bounded(date: NaiveDate) -> Option<Date> {
        (MIN_YEAR..=MAX_YEAR)
            .contains(&i64::from(date.year()))
            .then_some(Date(date))
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Day {
        Day(self.0.day() as u8)
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Month {
        Month(self.0.month0() as u8)
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        Year(self.0.year())
    }

    /// The month this date falls in
    pub fn displayed_month(&self) -> DisplayedMonth {
        DisplayedMonth::starting(self.first_of_month())
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday().into()
    }

    /// The following calendar day (`None` after the last allowed day)
    pub fn succ(&self) -> Option<Date> {
        self.0.succ_opt().and_then(Date::bounded)
    }

    /// The preceding calendar day (`None` before the first allowed day)
    pub fn pred(&self) -> Option<Date> {
        self.0.pred_opt().and_then(Date::bounded)
    }

    /// The number of days from this date to the other (negative if the other
    /// is earlier)
    pub fn days_until(&self, other: Date) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// The 1st of this date's month
    pub(crate) fn first_of_month(&self) -> Date {
        Date(self.0 - Days::new(u64::from(self.day().value()) - 1))
    }

    /// The last day of this date's month
    pub(crate) fn last_of_month(&self) -> Date {
        let days_in_month = days_in_month(self.year(), self.month());
        Date(self.first_of_month().0 + Days::new(u64::from(days_in_month) - 1))
    }

    /// Same day of the month, `months` later (or earlier if negative).  Only
    /// called on the 1st, so the day always exists.
    pub(crate) fn add_months(&self, months: i32) -> Option<Date> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.and_then(Date::bounded)
    }

    /// e.g. 5 Mar 2024 format
    pub fn as_long_date_format(&self) -> String {
        format!("{} {} {}", self.day(), self.month().short_name(), self.year())
    }

    /// mm/dd/yyyy format
    pub fn as_short_date_format(&self) -> String {
        self.0.format("%m/%d/%Y").to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i64,
    month: i64,
    day: i64,
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawDate {
            year: i64::from(self.year().value()),
            month: i64::from(self.month().value()),
            day: i64::from(self.day().value()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_date = RawDate::deserialize(deserializer)?;
        Date::from(raw_date.year, raw_date.month, raw_date.day).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        // Should return error
        assert!(Date::from(2024, 12, 1).is_err());
        assert!(Date::from(2024, -1, 1).is_err());
        assert!(Date::from(2024, 0, 0).is_err());
        assert!(Date::from(2024, 0, 32).is_err());
        assert!(Date::from(2023, 1, 29).is_err());
        assert!(Date::from(MAX_YEAR + 1, 0, 1).is_err());
        assert!(Date::from(MIN_YEAR - 1, 11, 31).is_err());
        assert!(Date::from(i64::from(i32::MAX), 11, 31).is_err());

        // Should be ok
        assert!(Date::from(2024, 1, 29).is_ok());
        assert!(Date::from(-500, 0, 1).is_ok());
        assert!(Date::from(MAX_YEAR, 11, 31).is_ok());
        assert!(Date::from(MIN_YEAR, 0, 1).is_ok());
    }

    #[test]
    fn days_in_month_accounts_for_leap_years() {
        let feb = Month::try_from(1_i64).unwrap();
        assert_eq!(days_in_month(Year(2024), feb), 29);
        assert_eq!(days_in_month(Year(2023), feb), 28);
        assert_eq!(days_in_month(Year(1900), feb), 28);
        assert_eq!(days_in_month(Year(2000), feb), 29);
        assert_eq!(days_in_month(Year(2023), Month::JANUARY), 31);
        assert_eq!(days_in_month(Year(2023), Month::try_from(3_i64).unwrap()), 30);
        assert_eq!(days_in_month(Year(2023), Month::DECEMBER), 31);
    }

    #[test]
    fn cmp() {
        let date_1 = Date::from(2024, 2, 10).unwrap();
        let date_2 = Date::from(2024, 2, 5).unwrap();
        assert!(date_2 < date_1);
        assert!(date_1 == Date::from(2024, 2, 10).unwrap());

        // Month outweighs day, year outweighs month
        assert!(Date::from(2024, 1, 29).unwrap() < Date::from(2024, 2, 1).unwrap());
        assert!(Date::from(2023, 11, 31).unwrap() < Date::from(2024, 0, 1).unwrap());
    }

    #[test]
    fn weekday() {
        assert_eq!(Date::from(1970, 0, 1).unwrap().weekday(), Weekday::Thursday);
        assert_eq!(Date::from(2000, 0, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from(2024, 2, 1).unwrap().weekday(), Weekday::Friday);
        assert_eq!(Date::from(2023, 9, 1).unwrap().weekday(), Weekday::Sunday);
        assert_eq!(Date::from(1969, 11, 31).unwrap().weekday(), Weekday::Wednesday);
        assert_eq!(Date::from(1600, 0, 1).unwrap().weekday(), Weekday::Saturday);
    }

    #[test]
    fn succ_and_pred_cross_month_and_year() {
        let new_years_eve = Date::from(2023, 11, 31).unwrap();
        let new_years_day = Date::from(2024, 0, 1).unwrap();
        assert_eq!(new_years_eve.succ(), Some(new_years_day));
        assert_eq!(new_years_day.pred(), Some(new_years_eve));

        let leap_day = Date::from(2024, 1, 29).unwrap();
        assert_eq!(leap_day.succ(), Date::from(2024, 2, 1).ok());
        assert_eq!(Date::from(2024, 2, 1).unwrap().pred(), Some(leap_day));
    }

    #[test]
    fn succ_and_pred_stop_at_the_allowed_years() {
        let last = Date::from(MAX_YEAR, 11, 31).unwrap();
        let first = Date::from(MIN_YEAR, 0, 1).unwrap();
        assert_eq!(last.succ(), None);
        assert_eq!(first.pred(), None);
        assert_eq!(last.pred(), Date::from(MAX_YEAR, 11, 30).ok());
        assert_eq!(first.succ(), Date::from(MIN_YEAR, 0, 2).ok());
    }

    #[test]
    fn days_until() {
        let start = Date::from(2023, 11, 28).unwrap();
        let end = Date::from(2024, 0, 3).unwrap();
        assert_eq!(start.days_until(end), 6);
        assert_eq!(end.days_until(start), -6);
        assert_eq!(start.days_until(start), 0);
    }

    #[test]
    fn formats() {
        let date = Date::from(2024, 2, 5).unwrap();
        assert_eq!(date.as_short_date_format(), "03/05/2024");
        assert_eq!(date.as_long_date_format(), "5 Mar 2024");
        assert_eq!(date.to_string(), "2024-03-05");
    }

    #[test]
    fn deserialize_validates() {
        let date: Date = serde_json::from_str(r#"{"year":2024,"month":1,"day":29}"#).unwrap();
        assert_eq!(date, Date::from(2024, 1, 29).unwrap());
        assert!(serde_json::from_str::<Date>(r#"{"year":2023,"month":1,"day":29}"#).is_err());
        assert!(serde_json::from_str::<Date>(r#"{"year":2023,"month":12,"day":1}"#).is_err());
        assert!(serde_json::from_str::<Date>(r#"{"year":10001,"month":0,"day":1}"#).is_err());

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":1,"day":29}"#);
    }
}
