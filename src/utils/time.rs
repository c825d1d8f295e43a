use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_english::{parse_date_string, Dialect};
use clap::ValueEnum;

/// This is the standard way of converting a date to a string in notetime.
pub fn date_to_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Order of day and month in ambiguous dates such as `03/04/2024`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DateStyle {
    #[default]
    Uk,
    Us,
}

impl From<DateStyle> for Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

/// Unambiguous layouts read without going through `chrono_english`. Month first forms without a
/// comma and `/` or `.` separated year first forms aren't understood by it.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%b %d %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Lenient date parsing used for range bounds and note file names.
///
/// Year first stamps (`2024-01-15`, `2024/01/15`, `20240115`) and month first names
/// (`Jan 15 2024`) are read directly, anything else is handed to `chrono_english`, which
/// understands forms like `15/01/2024`, `14 Feb 2024` or `yesterday`. Relative expressions are
/// resolved against `base`.
#[derive(Debug, Clone, Copy)]
pub struct DateParser {
    style: DateStyle,
    base: DateTime<Utc>,
}

impl DateParser {
    /// Relative dates are resolved against the local wall clock, the same day
    /// [DefaultClock](super::clock::DefaultClock) reports.
    pub fn new(style: DateStyle) -> Self {
        Self::with_base(style, Local::now().naive_local().and_utc())
    }

    pub fn with_base(style: DateStyle, base: DateTime<Utc>) -> Self {
        Self { style, base }
    }

    /// Returns a human readable reason on failure.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("empty date string".into());
        }
        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        {
            return Ok(date);
        }
        if input.len() == 8 && input.bytes().all(|v| v.is_ascii_digit()) {
            if let Ok(date) = NaiveDate::parse_from_str(input, "%Y%m%d") {
                return Ok(date);
            }
        }
        parse_date_string(input, self.base, Dialect::from(self.style))
            .map(|v| v.date_naive())
            .map_err(|e| e.to_string())
    }
}
