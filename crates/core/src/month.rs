// SPDX-License-Identifier: MIT

//!
//! The displayed month & month navigation
//!

use crate::{Date, DateError, Month, Year, days_in_month};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Which way to navigate from the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

/// The month currently shown by the calendar.  Navigation always lands on the
/// 1st of a month, so the 1st is all that's held.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct DisplayedMonth {
    first_day: Date,
}

impl DisplayedMonth {
    /// Create a new [`DisplayedMonth`] from a year & a 0-based month index.
    /// This is where the host's initial year/month is validated.
    pub fn from(year: i64, month: i64) -> Result<Self, DateError> {
        Ok(Self {
            first_day: Date::from(year, month, 1)?,
        })
    }

    /// Only for dates that are the 1st of their month
    pub(crate) fn starting(first_day: Date) -> Self {
        Self { first_day }
    }

    pub fn year(&self) -> Year {
        self.first_day.year()
    }

    pub fn month(&self) -> Month {
        self.first_day.month()
    }

    /// The month before or after this one
    pub fn advance(&self, direction: Direction) -> Self {
        let months = match direction {
            Direction::Previous => -1,
            Direction::Next => 1,
        };
        match self.first_day.add_months(months) {
            Some(first_day) => Self { first_day },
            None => {
                warn!("Can't navigate {direction:?} from {self}, staying put");
                *self
            }
        }
    }

    /// The previous month (January wraps to December of the previous year).
    /// January [`MIN_YEAR`](crate::MIN_YEAR) has no previous month and stays
    /// where it is.
    pub fn previous(&self) -> Self {
        self.advance(Direction::Previous)
    }

    /// The next month (December wraps to January of the next year).
    /// December [`MAX_YEAR`](crate::MAX_YEAR) has no next month and stays
    /// where it is.
    pub fn next(&self) -> Self {
        self.advance(Direction::Next)
    }

    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// The 1st of the month
    pub fn first_day(&self) -> Date {
        self.first_day
    }

    /// The last day of the month
    pub fn last_day(&self) -> Date {
        self.first_day.last_of_month()
    }

    /// The given day of this month, if it exists
    pub fn date(&self, day: i64) -> Result<Date, DateError> {
        Date::new(self.year(), self.month(), day)
    }

    /// Whether the date falls within this month
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// e.g. "2024 - March"
    pub fn label(&self) -> String {
        format!("{} - {}", self.year(), self.month().long_name())
    }
}

impl fmt::Display for DisplayedMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[derive(Serialize, Deserialize)]
struct RawDisplayedMonth {
    year: i64,
    month: i64,
}

impl Serialize for DisplayedMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawDisplayedMonth {
            year: i64::from(self.year().value()),
            month: i64::from(self.month().value()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DisplayedMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDisplayedMonth::deserialize(deserializer)?;
        DisplayedMonth::from(raw.year, raw.month).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{MAX_YEAR, MIN_YEAR};

    fn month(year: i64, month: i64) -> DisplayedMonth {
        DisplayedMonth::from(year, month).unwrap()
    }

    #[test]
    fn from() {
        assert!(DisplayedMonth::from(2024, 12).is_err());
        assert!(DisplayedMonth::from(2024, -1).is_err());
        assert!(DisplayedMonth::from(2024, 0).is_ok());
        assert!(DisplayedMonth::from(2024, 11).is_ok());
    }

    #[test]
    fn previous_wraps_january_to_december() {
        assert_eq!(month(2024, 0).advance(Direction::Previous), month(2023, 11));
        assert_eq!(month(2024, 5).advance(Direction::Previous), month(2024, 4));
        assert_eq!(month(0, 0).previous(), month(-1, 11));
    }

    #[test]
    fn next_wraps_december_to_january() {
        assert_eq!(month(2024, 11).advance(Direction::Next), month(2025, 0));
        assert_eq!(month(2024, 5).advance(Direction::Next), month(2024, 6));
    }

    #[test]
    fn next_then_previous_is_identity() {
        let start = month(2024, 2);
        let mut current = start;
        for _ in 0..30 {
            current = current.next();
        }
        assert_eq!(current, month(2026, 8));
        for _ in 0..30 {
            current = current.previous();
        }
        assert_eq!(current, start);
    }

    #[test]
    fn anchors() {
        let feb = month(2024, 1);
        assert_eq!(feb.first_day(), Date::from(2024, 1, 1).unwrap());
        assert_eq!(feb.last_day(), Date::from(2024, 1, 29).unwrap());
        assert!(feb.contains(Date::from(2024, 1, 15).unwrap()));
        assert!(!feb.contains(Date::from(2023, 1, 15).unwrap()));
        assert!(feb.date(30).is_err());
    }

    #[test]
    fn navigation_stops_at_the_allowed_years() {
        let last = month(MAX_YEAR, 11);
        let first = month(MIN_YEAR, 0);
        assert_eq!(last.next(), last);
        assert_eq!(first.previous(), first);
        assert_eq!(last.previous(), month(MAX_YEAR, 10));
        assert_eq!(first.next(), month(MIN_YEAR, 1));
        assert_eq!(last.last_day(), Date::from(MAX_YEAR, 11, 31).unwrap());
        assert!(DisplayedMonth::from(MAX_YEAR + 1, 0).is_err());
        assert!(DisplayedMonth::from(i64::from(i32::MAX), 11).is_err());
    }

    #[test]
    fn containing_month() {
        let date = Date::from(2024, 1, 17).unwrap();
        assert_eq!(date.displayed_month(), month(2024, 1));
        assert!(date.displayed_month().contains(date));
    }

    #[test]
    fn label() {
        assert_eq!(month(2024, 2).label(), "2024 - March");
        assert_eq!(month(1999, 11).to_string(), "1999 - December");
    }

    #[test]
    fn deserialize_validates() {
        let displayed: DisplayedMonth = serde_json::from_str(r#"{"year":2024,"month":2}"#).unwrap();
        assert_eq!(displayed, month(2024, 2));
        assert_eq!(
            serde_json::to_string(&displayed).unwrap(),
            r#"{"year":2024,"month":2}"#
        );
        assert!(serde_json::from_str::<DisplayedMonth>(r#"{"year":2024,"month":12}"#).is_err());
    }
}
