// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Range Calendar project*
//!
//! This crate holds the logic behind a month-grid calendar that lets a user
//! pick a range of days with two clicks: building the grid of days for a
//! month, tracking the selection across clicks & month navigation, and
//! reporting each completed range to the host.
//!
//! Nothing here draws anything.  The host renders the [`CellView`]s returned by
//! [`Calendar::cells`] however it likes and feeds clicks & navigation back in.
//!
//! As with the date types, if a value has been instantiated it is valid: the
//! only fallible operations are those that turn raw integers into dates and
//! months.
//!

mod calendar;
mod date;
mod grid;
mod month;
mod selection;

pub use calendar::*;
pub use date::*;
pub use grid::*;
pub use month::*;
pub use selection::*;

#[macro_use]
extern crate log;
