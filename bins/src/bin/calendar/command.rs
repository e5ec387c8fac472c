// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Commands typed at the calendar prompt
//!

use range_calendar_core::Direction;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can arise when parsing a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command `{0}` (type `help` for the list)")]
    Unknown(String),
}

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click the given day of the displayed month
    Click(i64),
    Navigate(Direction),
    /// Print the selection
    State,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if let Ok(day) = line.parse::<i64>() {
            return Ok(Command::Click(day));
        }
        match line.to_lowercase().as_str() {
            "p" | "prev" | "previous" | "<" => Ok(Command::Navigate(Direction::Previous)),
            "n" | "next" | ">" => Ok(Command::Navigate(Direction::Next)),
            "s" | "state" => Ok(Command::State),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

pub const HELP: &str = "\
<day>        click that day of the displayed month
p, prev, <   show the previous month
n, next, >   show the next month
s, state     print the selection
q, quit      exit";
