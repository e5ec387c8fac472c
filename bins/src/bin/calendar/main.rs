// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider Range Calendar project*
//!
//! A terminal host for the range calendar: pick two days and the range is
//! printed
//!

mod command;
mod config;
mod render;

use chrono::Datelike;
use clap::{Parser, ValueEnum, builder::PossibleValue};
use command::{Command, HELP};
use config::{CalendarConfig, ConfigError, initial_month};
use range_calendar_core::{Calendar, Date, DateRange, DisplayedMonth, RangeListener};
use render::{describe_selection, render};
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the terminal calendar
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    // Config file (if any), then the CLI on top
    let config = match &args.config {
        Some(path) => CalendarConfig::load(path)?,
        None => CalendarConfig::default(),
    };
    let log_level = args
        .log_level
        .or(config.log_level)
        .unwrap_or(LogLevel::Warn);

    // Setup logging (stderr, so the calendar on stdout stays readable)
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("range_calendar")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        log_level.into(),
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])?;
    debug!("Config = {config:?}");

    let displayed_month = initial_month(args.year, args.month, &config, today()?)?;
    info!("Opening at {displayed_month}");

    // The host's side of the calendar: report each completed range
    let json = args.json;
    let listener = move |start: Date, end: Date| match report_range(json, start, end) {
        Ok(report) => println!("{report}"),
        Err(error) => error!("Unable to serialise range: {error}"),
    };
    let mut calendar = Calendar::new(displayed_month, listener);

    run(&mut calendar, io::stdin().lock(), io::stdout())?;
    Ok(())
}

/// The line printed for a completed range, either as text or as a JSON
/// [`DateRange`]
fn report_range(json: bool, start: Date, end: Date) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(&DateRange::new(start, end))
    } else {
        Ok(format!(
            "Selected date range: {} - {}",
            start.as_short_date_format(),
            end.as_short_date_format()
        ))
    }
}

/// Read commands until `quit` or the end of input, redrawing after each one
fn run<L, R, W>(calendar: &mut Calendar<L>, input: R, mut output: W) -> io::Result<()>
where
    L: RangeListener,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render(calendar))?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Click(day)) => match calendar.click_day(day) {
                Ok(_) => (),
                Err(error) => {
                    warn!("Ignoring click: {error}");
                    writeln!(output, "{error}")?;
                    continue;
                }
            },
            Ok(Command::Navigate(direction)) => {
                calendar.navigate(direction);
            }
            Ok(Command::State) => {
                writeln!(output, "{}", describe_selection(&calendar.selection()))?;
                continue;
            }
            Ok(Command::Help) => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            Ok(Command::Quit) => break,
            Err(error) => {
                writeln!(output, "{error}")?;
                continue;
            }
        }
        write!(output, "{}", render(calendar))?;
    }
    Ok(())
}

/// The current month, from the local clock
fn today() -> Result<DisplayedMonth, ConfigError> {
    let today = chrono::Local::now().date_naive();
    Ok(DisplayedMonth::from(
        i64::from(today.year()),
        i64::from(today.month0()),
    )?)
}

/// Range Calendar CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Pick a date range from a month calendar",
    after_help = "Type a day number to click it, `p`/`n` to change month, `q` to quit"
)]
pub struct Cli {
    /// Year to open at (defaults to the config file, then the current year)
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Month to open at, 1 to 12 (defaults to the config file, then the
    /// current month)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=12))]
    pub month: Option<i64>,

    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How much to log to stderr
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Print each selected range as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Off,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            LogLevel::Off => Some(PossibleValue::new("off").help("Log nothing")),
            LogLevel::Error => Some(PossibleValue::new("error")),
            LogLevel::Warn => Some(PossibleValue::new("warn").help("Ignored input (default)")),
            LogLevel::Info => Some(PossibleValue::new("info").help("Selected ranges")),
            LogLevel::Debug => {
                Some(PossibleValue::new("debug").help("Every click and navigation"))
            }
            LogLevel::Trace => Some(PossibleValue::new("trace")),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
