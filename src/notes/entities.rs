use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::utils::time::DateParser;

use super::error::DateParseError;

/// One `Time.<Category>.<Name>: <Hours>` occurrence found in a note.
#[derive(PartialEq, Debug, Serialize, Clone)]
pub struct TimeEntry {
    /// Base name of the note the entry was found in, without extension.
    pub source_file: Arc<str>,
    pub category: Arc<str>,
    pub name: Arc<str>,
    pub hours: f64,
}

impl TimeEntry {
    pub fn new(
        source_file: impl Into<Arc<str>>,
        category: impl Into<Arc<str>>,
        name: impl Into<Arc<str>>,
        hours: f64,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            category: category.into(),
            name: name.into(),
            hours,
        }
    }

    pub fn is_category(&self, category: &str) -> bool {
        &*self.category == category
    }
}

/// Inclusive range of days. `begin <= end` is not required, an inverted range simply contains
/// nothing.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize)]
pub struct DateRange {
    pub begin: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Self {
        Self { begin, end }
    }

    /// Parses both bounds with the lenient date parser.
    pub fn parse(dates: &DateParser, begin: &str, end: &str) -> Result<Self, DateParseError> {
        let parse_bound = |input: &str| {
            dates.parse(input).map_err(|reason| DateParseError::Bound {
                input: input.to_string(),
                reason,
            })
        };
        let range = Self::new(parse_bound(begin)?, parse_bound(end)?);
        if range.begin > range.end {
            warn!("Range {} -> {} is inverted, nothing will match", range.begin, range.end);
        }
        Ok(range)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.begin <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::{
        notes::error::DateParseError,
        utils::time::{DateParser, DateStyle},
    };

    use super::DateRange;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn parser() -> DateParser {
        DateParser::with_base(DateStyle::Uk, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = DateRange::new(date(10), date(20));
        assert!(range.contains(date(10)));
        assert!(range.contains(date(15)));
        assert!(range.contains(date(20)));
        assert!(!range.contains(date(9)));
        assert!(!range.contains(date(21)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::new(date(20), date(10));
        assert!(!range.contains(date(15)));
        assert!(!range.contains(date(10)));
    }

    #[test]
    fn test_range_parse() {
        assert_eq!(
            DateRange::parse(&parser(), "2024-01-10", "2024-01-20"),
            Ok(DateRange::new(date(10), date(20)))
        );
        assert!(matches!(
            DateRange::parse(&parser(), "2024-01-10", "not-a-date"),
            Err(DateParseError::Bound { input, .. }) if input == "not-a-date"
        ));
    }
}
