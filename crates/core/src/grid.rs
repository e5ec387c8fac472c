// SPDX-License-Identifier: MIT

//!
//! The month grid
//!

use crate::{Date, DateRange, DisplayedMonth};
use serde::Serialize;

/// Short weekday names for the header row, column k holding weekday k
pub const WEEKDAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The number of columns in the grid
pub const DAYS_PER_WEEK: usize = 7;

/// One position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "date")]
pub enum DayCell {
    /// Filler placed before the 1st so that it lands in its weekday's column
    Blank,
    Day(Date),
}

impl DayCell {
    /// The day of the month to display (`None` for blanks)
    pub fn day_number(&self) -> Option<u8> {
        self.date().map(|date| date.day().value())
    }

    pub fn date(&self) -> Option<Date> {
        match self {
            DayCell::Blank => None,
            DayCell::Day(date) => Some(*date),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }
}

/// The number of blanks that precede the 1st of the month
pub fn leading_blanks(month: DisplayedMonth) -> usize {
    month.first_day().weekday().index()
}

/// Build the grid for a month: leading blanks followed by every day of the
/// month.  The last row is not padded.
pub fn build(month: DisplayedMonth) -> Vec<DayCell> {
    let blanks = leading_blanks(month);
    let mut cells = Vec::with_capacity(blanks + usize::from(month.days_in_month()));
    cells.extend(std::iter::repeat_n(DayCell::Blank, blanks));

    let days = DateRange::new(month.first_day(), month.last_day()).days();
    cells.extend(days.map(DayCell::Day));
    cells
}

#[cfg(test)]
mod test {
    use super::*;

    fn month(year: i64, month: i64) -> DisplayedMonth {
        DisplayedMonth::from(year, month).unwrap()
    }

    #[test]
    fn length_is_blanks_plus_days() {
        for year in [1900, 2000, 2023, 2024, -44] {
            for index in 0..12 {
                let displayed = month(year, index);
                let cells = build(displayed);
                let blanks = displayed.first_day().weekday().index();
                assert_eq!(
                    cells.len(),
                    blanks + usize::from(displayed.days_in_month()),
                    "{displayed}"
                );
                assert!(cells[..blanks].iter().all(DayCell::is_blank));
                assert!(cells[blanks..].iter().all(|cell| !cell.is_blank()));
            }
        }
    }

    #[test]
    fn march_2024() {
        // 1 Mar 2024 was a Friday
        let cells = build(month(2024, 2));
        assert_eq!(leading_blanks(month(2024, 2)), 5);
        assert_eq!(cells.len(), 5 + 31);
        assert_eq!(cells[5].day_number(), Some(1));
        assert_eq!(cells.last().and_then(DayCell::day_number), Some(31));
    }

    #[test]
    fn columns_hold_their_weekday() {
        let cells = build(month(2023, 9));
        assert_eq!(leading_blanks(month(2023, 9)), 0);
        for (position, cell) in cells.iter().enumerate() {
            if let Some(date) = cell.date() {
                assert_eq!(date.weekday().index(), position % DAYS_PER_WEEK);
            }
        }
    }

    #[test]
    fn february_in_leap_and_common_years() {
        assert_eq!(build(month(2024, 1)).iter().filter(|c| !c.is_blank()).count(), 29);
        assert_eq!(build(month(2023, 1)).iter().filter(|c| !c.is_blank()).count(), 28);
    }

    #[test]
    fn last_allowed_month() {
        let cells = build(month(crate::MAX_YEAR, 11));
        assert_eq!(cells.last().and_then(DayCell::day_number), Some(31));
    }

    #[test]
    fn is_pure() {
        assert_eq!(build(month(2024, 6)), build(month(2024, 6)));
    }
}
