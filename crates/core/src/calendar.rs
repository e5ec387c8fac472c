// SPDX-License-Identifier: MIT

//!
//! The calendar widget: a displayed month plus a range selection, reporting
//! each completed range to the host
//!

use crate::{
    Date, DateError, DateRange, DayCell, Direction, DisplayedMonth, Highlight, SelectionState,
    build, highlight,
};
use serde::Serialize;

/// Receives each completed range from a [`Calendar`]
pub trait RangeListener {
    /// Called once per completed range.  `start <= end` always holds.
    fn on_select_date_range(&mut self, start: Date, end: Date);
}

impl<F> RangeListener for F
where
    F: FnMut(Date, Date),
{
    fn on_select_date_range(&mut self, start: Date, end: Date) {
        self(start, end)
    }
}

/// A grid cell together with how it should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub cell: DayCell,
    pub highlight: Highlight,
}

impl CellView {
    pub fn day_number(&self) -> Option<u8> {
        self.cell.day_number()
    }

    pub fn is_selected(&self) -> bool {
        self.highlight.is_selected()
    }
}

/// The calendar widget
#[derive(Debug)]
pub struct Calendar<L: RangeListener> {
    /// The month being shown (only changed by navigation)
    displayed_month: DisplayedMonth,

    /// The selection, which is kept when navigating
    selection: SelectionState,

    /// The host's callback
    listener: L,
}

impl<L: RangeListener> Calendar<L> {
    /// Create a new calendar showing the given month with nothing selected
    pub fn new(displayed_month: DisplayedMonth, listener: L) -> Self {
        debug!("New calendar showing {displayed_month}");
        Self {
            displayed_month,
            selection: SelectionState::Empty,
            listener,
        }
    }

    pub fn displayed_month(&self) -> DisplayedMonth {
        self.displayed_month
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// e.g. "2024 - March"
    pub fn label(&self) -> String {
        self.displayed_month.label()
    }

    /// Click a day (which may be in any month).  Returns the range if this
    /// click completed one, in which case the listener has been told.
    pub fn click(&mut self, date: Date) -> Option<DateRange> {
        let (selection, range) = self.selection.on_day_click(date);
        debug!("Clicked {date}: {:?} -> {:?}", self.selection, selection);
        self.selection = selection;
        if let Some(range) = range {
            info!("Selected date range {} - {}", range.start(), range.end());
            self.listener.on_select_date_range(range.start(), range.end());
        }
        range
    }

    /// Click the given day of the displayed month
    pub fn click_day(&mut self, day: i64) -> Result<Option<DateRange>, DateError> {
        let date = self.displayed_month.date(day)?;
        Ok(self.click(date))
    }

    /// Show the previous or next month.  The selection is untouched.
    pub fn navigate(&mut self, direction: Direction) -> DisplayedMonth {
        let displayed_month = self.displayed_month.advance(direction);
        debug!("Navigated {direction:?}: {} -> {displayed_month}", self.displayed_month);
        self.displayed_month = displayed_month;
        displayed_month
    }

    pub fn previous_month(&mut self) -> DisplayedMonth {
        self.navigate(Direction::Previous)
    }

    pub fn next_month(&mut self) -> DisplayedMonth {
        self.navigate(Direction::Next)
    }

    /// The displayed month's grid, highlighted from the current selection
    pub fn cells(&self) -> Vec<CellView> {
        build(self.displayed_month)
            .into_iter()
            .map(|cell| CellView {
                cell,
                highlight: cell
                    .date()
                    .map(|date| highlight(&self.selection, date))
                    .unwrap_or_default(),
            })
            .collect()
    }
}
