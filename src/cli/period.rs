use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use now::DateTimeNow;
use tracing::info;

use crate::utils::{clock::Clock, time::date_to_string};

use super::report::{report_time_spent, ReportConfig};

/// Preset reporting periods, all relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
    LastYear,
}

impl Period {
    /// First and last day of the period. Weeks run from Monday to Sunday.
    pub fn range(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::ThisWeek => week_of(today),
            Period::LastWeek => week_of(today - Duration::weeks(1)),
            Period::ThisMonth => month_of(today),
            Period::LastMonth => month_of(months_back(today, 1)),
            Period::ThisYear => year_of(today),
            Period::LastYear => year_of(months_back(today, 12)),
        }
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn week_of(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let begin = date - Duration::days(date.weekday().num_days_from_monday() as i64);
    (begin, begin + Duration::days(6))
}

fn month_of(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let date = start_of(date);
    (
        date.beginning_of_month().date_naive(),
        date.end_of_month().date_naive(),
    )
}

fn year_of(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let date = start_of(date);
    (
        date.beginning_of_year().date_naive(),
        date.end_of_year().date_naive(),
    )
}

/// Same day `months` back, clamped to the end of shorter months.
fn months_back(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Reports on `period` as seen from `clock`'s current day.
pub fn report_period(
    period: Period,
    config: &ReportConfig,
    clock: &impl Clock,
    out: &mut impl Write,
) -> Result<()> {
    let (begin, end) = period.range(clock.today());
    info!("{period:?}: {begin} -> {end}");
    report_time_spent(config, &date_to_string(begin), &date_to_string(end), out)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use anyhow::Result;
    use chrono::{Datelike, Duration, NaiveDate, Weekday};
    use tempfile::tempdir;

    use crate::{cli::report::ReportConfig, utils::clock::MockClock};

    use super::{report_period, Period};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weeks() {
        // a Wednesday
        let today = date(2024, 3, 13);
        assert_eq!(
            Period::ThisWeek.range(today),
            (date(2024, 3, 11), date(2024, 3, 17))
        );
        assert_eq!(
            Period::LastWeek.range(today),
            (date(2024, 3, 4), date(2024, 3, 10))
        );

        for offset in 0..14 {
            let day = today + Duration::days(offset);
            let (begin, end) = Period::ThisWeek.range(day);
            assert_eq!(begin.weekday(), Weekday::Mon);
            assert_eq!(end - begin, Duration::days(6));
            assert!(begin <= day && day <= end);
        }
    }

    #[test]
    fn test_week_across_years() {
        assert_eq!(
            Period::ThisWeek.range(date(2025, 1, 1)),
            (date(2024, 12, 30), date(2025, 1, 5))
        );
    }

    #[test]
    fn test_months() {
        let today = date(2024, 3, 31);
        assert_eq!(
            Period::ThisMonth.range(today),
            (date(2024, 3, 1), date(2024, 3, 31))
        );
        assert_eq!(
            Period::LastMonth.range(today),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            Period::LastMonth.range(date(2024, 1, 15)),
            (date(2023, 12, 1), date(2023, 12, 31))
        );
    }

    #[test]
    fn test_years() {
        let today = date(2024, 2, 29);
        assert_eq!(
            Period::ThisYear.range(today),
            (date(2024, 1, 1), date(2024, 12, 31))
        );
        assert_eq!(
            Period::LastYear.range(today),
            (date(2023, 1, 1), date(2023, 12, 31))
        );
    }

    #[test]
    fn test_report_period_uses_clock() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("2024-03-01.md"), "Time.Area.Eng: 2")?;
        fs::write(dir.path().join("2024-03-20.md"), "Time.Area.Ops: 1")?;
        fs::write(dir.path().join("2024-02-28.md"), "Time.Area.Old: 5")?;

        let mut clock = MockClock::new();
        clock.expect_today().return_const(date(2024, 3, 13));

        let config = ReportConfig {
            path: dir.path().to_owned(),
            ..Default::default()
        };
        let mut out = vec![];
        report_period(Period::ThisMonth, &config, &clock, &mut out)?;
        let out = String::from_utf8(out)?;

        assert!(out.contains("| Eng "));
        assert!(out.contains("| Ops "));
        assert!(!out.contains("Old"));
        assert!(out.ends_with("Total hours: 3.0\n"));
        Ok(())
    }
}
