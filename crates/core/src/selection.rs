// SPDX-License-Identifier: MIT

//!
//! Two-click range selection
//!

use crate::Date;
use serde::{Deserialize, Deserializer, Serialize};
use std::iter::successors;

/// An inclusive range of calendar days.  `start <= end` always holds.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a new [`DateRange`], swapping the endpoints if they're given in
    /// reverse order
    pub fn new(first: Date, second: Date) -> Self {
        if second >= first {
            Self {
                start: first,
                end: second,
            }
        } else {
            Self {
                start: second,
                end: first,
            }
        }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether the date is within the range (both endpoints included)
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// The number of days in the range (a single-day range has 1)
    pub fn day_count(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Every day of the range, in order
    pub fn days(self) -> impl Iterator<Item = Date> {
        let end = self.end;
        successors(Some(self.start), move |date| {
            if *date < end {
                date.succ()
            } else {
                None
            }
        })
    }
}

#[derive(Deserialize)]
struct RawDateRange {
    start: Date,
    end: Date,
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDateRange::deserialize(deserializer)?;
        Ok(DateRange::new(raw.start, raw.end))
    }
}

/// Where the two-click selection is up to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum SelectionState {
    /// Nothing selected
    #[default]
    Empty,

    /// One endpoint chosen, awaiting the second
    PartialStart { date: Date },

    /// Both endpoints chosen
    Completed { range: DateRange },
}

impl SelectionState {
    /// Apply a day click.  Returns the new state, plus the range if this click
    /// completed one.
    ///
    /// A click when nothing or a whole range is selected starts a new
    /// selection (any old range is discarded).  A click when one endpoint is
    /// selected completes the range, whatever order the two days are in.
    pub fn on_day_click(self, clicked: Date) -> (SelectionState, Option<DateRange>) {
        match self {
            SelectionState::Empty | SelectionState::Completed { .. } => {
                (SelectionState::PartialStart { date: clicked }, None)
            }
            SelectionState::PartialStart { date: first } => {
                let range = DateRange::new(first, clicked);
                (SelectionState::Completed { range }, Some(range))
            }
        }
    }

    /// The completed range, if there is one
    pub fn range(&self) -> Option<DateRange> {
        match self {
            SelectionState::Completed { range } => Some(*range),
            _ => None,
        }
    }

    /// The endpoint awaiting its partner, if there is one
    pub fn pending_start(&self) -> Option<Date> {
        match self {
            SelectionState::PartialStart { date } => Some(*date),
            _ => None,
        }
    }
}

/// How a day should be highlighted.  Always derived from the
/// [`SelectionState`], never stored.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Highlight {
    /// The day is the pending endpoint, or the start of the completed range
    pub is_start: bool,

    /// The day is the end of the completed range
    pub is_end: bool,

    /// The day is within the completed range (endpoints included)
    pub in_range: bool,
}

impl Highlight {
    /// Whether the day is drawn as selected
    pub fn is_selected(&self) -> bool {
        self.is_start || self.in_range
    }
}

/// Derive the highlighting of a date from the selection
pub fn highlight(state: &SelectionState, date: Date) -> Highlight {
    if let Some(start) = state.pending_start() {
        return Highlight {
            is_start: date == start,
            ..Highlight::default()
        };
    }
    match state.range() {
        Some(range) => Highlight {
            is_start: date == range.start(),
            is_end: date == range.end(),
            in_range: range.contains(date),
        },
        None => Highlight::default(),
    }
}
