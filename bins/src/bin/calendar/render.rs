// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Drawing the calendar as text
//!

use range_calendar_core::{
    Calendar, CellView, DAYS_PER_WEEK, RangeListener, SelectionState, WEEKDAY_NAMES,
};

/// Width of one grid column (including its separator)
const CELL_WIDTH: usize = 5;

/// Draw the label, weekday header & grid.  Selected days are bracketed.
pub fn render<L: RangeListener>(calendar: &Calendar<L>) -> String {
    render_cells(&calendar.label(), &calendar.cells())
}

pub fn render_cells(label: &str, cells: &[CellView]) -> String {
    let width = CELL_WIDTH * DAYS_PER_WEEK;

    // Label, with the navigation hints either side
    let mut lines = vec![format!("{:^width$}", format!("<  {label}  >"))];

    // Weekday header
    let header: String = WEEKDAY_NAMES
        .iter()
        .map(|name| format!("{name:^width$}", width = CELL_WIDTH))
        .collect();
    lines.push(header.trim_end().to_string());

    // Days
    for week in cells.chunks(DAYS_PER_WEEK) {
        let row: String = week.iter().map(render_cell).collect();
        lines.push(row.trim_end().to_string());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_cell(view: &CellView) -> String {
    match view.day_number() {
        None => " ".repeat(CELL_WIDTH),
        Some(day) if view.is_selected() => format!("[{day:>2}] "),
        Some(day) => format!(" {day:>2}  "),
    }
}

/// Describe the selection for the `state` command
pub fn describe_selection(selection: &SelectionState) -> String {
    if let Some(range) = selection.range() {
        format!(
            "Selected {} - {} ({} days)",
            range.start().as_short_date_format(),
            range.end().as_short_date_format(),
            range.day_count()
        )
    } else if let Some(date) = selection.pending_start() {
        format!("Start {}, awaiting end", date.as_short_date_format())
    } else {
        String::from("Nothing selected")
    }
}
