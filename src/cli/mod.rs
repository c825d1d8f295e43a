pub mod output;
pub mod period;
pub mod report;

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputFormat;
use period::{report_period, Period};
use report::{report_time_spent, ReportConfig};

use crate::{
    notes::{extract::AREA, selector::UndatedNotes},
    utils::{
        clock::DefaultClock,
        logging::{enable_logging, LogLevel},
        percentage::Percentage,
        time::DateStyle,
    },
};

#[derive(Parser, Debug)]
#[command(name = "notetime", version, long_about = None)]
#[command(about = "Summarize time tracking data kept in daily notes", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, global = true, default_value_t = LogLevel::Warning, help = "Logging level")]
    log: LogLevel,
}

/// Options shared by every report.
#[derive(Debug, Clone, clap::Args)]
pub struct ReportArgs {
    #[arg(long, default_value = ".", help = "Path to the input files")]
    path: PathBuf,
    #[arg(long, default_value = AREA, help = "Category summarized in the main table")]
    category: String,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(
        long,
        help = "Skip notes whose names don't start with a date instead of failing"
    )]
    skip_undated: bool,
    #[arg(short = 'p', long = "min-percent", help = "Only show rows with at least this share of the total", default_value_t = Percentage::ZERO)]
    min_percentage: Percentage,
    #[arg(long, default_value_t = OutputFormat::Table, help = "Output format")]
    format: OutputFormat,
    #[arg(long, help = "Also print hours for every category and name")]
    totals: bool,
}

impl From<ReportArgs> for ReportConfig {
    fn from(
        ReportArgs {
            path,
            category,
            date_style,
            skip_undated,
            min_percentage,
            format,
            totals,
        }: ReportArgs,
    ) -> Self {
        ReportConfig {
            path,
            category,
            date_style,
            undated: if skip_undated {
                UndatedNotes::Skip
            } else {
                UndatedNotes::Abort
            },
            min_percentage,
            format,
            totals,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "This week's time summary", alias = "thisweek")]
    ThisWeek {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "Last week's time summary", alias = "lastweek")]
    LastWeek {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "This month's time summary", alias = "thismonth")]
    ThisMonth {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "Last month's time summary", alias = "lastmonth")]
    LastMonth {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "This year's time summary", alias = "thisyear")]
    ThisYear {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "Last year's time summary", alias = "lastyear")]
    LastYear {
        #[command(flatten)]
        report: ReportArgs,
    },
    #[command(about = "Time summary between two dates")]
    Range {
        #[arg(
            long,
            short,
            help = "Start of the range, inclusive. Examples are \"2025-03-01\", \"15/03/2025\", \"yesterday\""
        )]
        start: String,
        #[arg(
            long,
            short,
            help = "End of the range, inclusive. Examples are \"2025-03-31\", \"16/03/2025\", \"today\""
        )]
        end: String,
        #[command(flatten)]
        report: ReportArgs,
    },
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();
    enable_logging(args.log)?;

    let mut stdout = io::stdout().lock();
    let clock = DefaultClock;
    match args.commands {
        Commands::ThisWeek { report } => {
            report_period(Period::ThisWeek, &report.into(), &clock, &mut stdout)
        }
        Commands::LastWeek { report } => {
            report_period(Period::LastWeek, &report.into(), &clock, &mut stdout)
        }
        Commands::ThisMonth { report } => {
            report_period(Period::ThisMonth, &report.into(), &clock, &mut stdout)
        }
        Commands::LastMonth { report } => {
            report_period(Period::LastMonth, &report.into(), &clock, &mut stdout)
        }
        Commands::ThisYear { report } => {
            report_period(Period::ThisYear, &report.into(), &clock, &mut stdout)
        }
        Commands::LastYear { report } => {
            report_period(Period::LastYear, &report.into(), &clock, &mut stdout)
        }
        Commands::Range { start, end, report } => {
            report_time_spent(&report.into(), &start, &end, &mut stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{
        cli::{output::OutputFormat, report::ReportConfig},
        notes::selector::UndatedNotes,
        utils::logging::LogLevel,
    };

    use super::{Args, Commands};

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["notetime", "this-month"]).unwrap();
        assert_eq!(args.log, LogLevel::Warning);
        let Commands::ThisMonth { report } = args.commands else {
            panic!("expected this-month");
        };
        let config = ReportConfig::from(report);
        assert_eq!(config.path, PathBuf::from("."));
        assert_eq!(config.category, "Area");
        assert_eq!(config.undated, UndatedNotes::Abort);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_path_on_every_period() {
        for command in [
            "this-week",
            "last-week",
            "this-month",
            "last-month",
            "this-year",
            "last-year",
            "lastyear",
        ] {
            let args = Args::try_parse_from(["notetime", command, "--path", "/notes"]).unwrap();
            assert!(!matches!(args.commands, Commands::Range { .. }), "{command}");
        }
    }

    #[test]
    fn test_parse_log_level() {
        let args = Args::try_parse_from(["notetime", "--log", "debug", "last-week"]).unwrap();
        assert_eq!(args.log, LogLevel::Debug);
        let args = Args::try_parse_from(["notetime", "last-week", "--log", "info"]).unwrap();
        assert_eq!(args.log, LogLevel::Info);
        assert!(Args::try_parse_from(["notetime", "--log", "loud", "last-week"]).is_err());
    }

    #[test]
    fn test_parse_range() {
        let args = Args::try_parse_from([
            "notetime",
            "range",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "--skip-undated",
            "--format",
            "json",
            "-p",
            "5%",
        ])
        .unwrap();
        let Commands::Range { start, end, report } = args.commands else {
            panic!("expected range");
        };
        assert_eq!(start, "2024-01-01");
        assert_eq!(end, "2024-01-31");
        let config = ReportConfig::from(report);
        assert_eq!(config.undated, UndatedNotes::Skip);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(*config.min_percentage, 5.);
    }
}
