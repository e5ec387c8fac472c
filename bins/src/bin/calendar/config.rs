// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Range Calendar CLI config
//!

use crate::LogLevel;
use range_calendar_core::{DateError, DisplayedMonth};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when working out the config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid initial month: {0}")]
    Date(#[from] DateError),
}

/// The config that can be saved to disk.  Every field is optional, and any
/// CLI flag given overrides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    /// The month to open at (month is 0-based, e.g. `{"year": 2024, "month": 2}`)
    pub initial: Option<DisplayedMonth>,

    /// How much to log to stderr
    pub log_level: Option<LogLevel>,
}

impl CalendarConfig {
    /// Load the config from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: CalendarConfig = serde_json::from_str(&data)?;
        Ok(config)
    }
}

/// Work out which month to open at.
///
/// The CLI year/month (month is 1-based) win, then the config file, then
/// today.  A year or month given on its own is combined with the fallback.
pub fn initial_month(
    cli_year: Option<i64>,
    cli_month: Option<i64>,
    config: &CalendarConfig,
    today: DisplayedMonth,
) -> Result<DisplayedMonth, ConfigError> {
    let fallback = config.initial.unwrap_or(today);
    let year = cli_year.unwrap_or_else(|| i64::from(fallback.year().value()));
    let month = match cli_month {
        Some(month) => month - 1,
        None => i64::from(fallback.month().value()),
    };
    Ok(DisplayedMonth::from(year, month)?)
}
