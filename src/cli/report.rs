use std::{io::Write, path::PathBuf};

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::{
    notes::{
        analysis::{summarize_by_category, summarize_totals},
        entities::DateRange,
        extract::AREA,
        read_entries,
        selector::{select_files, UndatedNotes},
    },
    utils::{
        percentage::Percentage,
        time::{DateParser, DateStyle},
    },
};

use super::output::{print_json, print_summary, print_totals, OutputFormat};

/// Everything a single report needs. Built once from the command line.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the notes.
    pub path: PathBuf,
    /// Category summarized in the main table.
    pub category: String,
    pub date_style: DateStyle,
    pub undated: UndatedNotes,
    /// Rows below this share are left out of the printed table.
    pub min_percentage: Percentage,
    pub format: OutputFormat,
    /// Also print hours for every category and name.
    pub totals: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            category: AREA.to_string(),
            date_style: DateStyle::default(),
            undated: UndatedNotes::default(),
            min_percentage: Percentage::ZERO,
            format: OutputFormat::default(),
            totals: false,
        }
    }
}

/// Summarizes time spent in notes dated between `begin` and `end` (inclusive) and writes the
/// result to `out`.
///
/// Bounds that can't be read as dates are reported to `out` and aren't treated as failures.
/// Notes whose names can't be read as dates fail the report unless configured otherwise.
#[instrument(skip(out))]
pub fn report_time_spent(
    config: &ReportConfig,
    begin: &str,
    end: &str,
    out: &mut impl Write,
) -> Result<()> {
    info!("{begin} -> {end}");

    let dates = DateParser::new(config.date_style);
    let range = match DateRange::parse(&dates, begin, end) {
        Ok(range) => range,
        Err(e) => {
            writeln!(out, "Error parsing date: {e}")?;
            return Ok(());
        }
    };

    let files = select_files(&config.path, &range, &dates, config.undated)?;
    debug!("Selected {} notes", files.len());
    let entries = read_entries(&files)?;

    let summary = summarize_by_category(&entries, &config.category);
    let totals = config.totals.then(|| summarize_totals(&entries));

    match config.format {
        OutputFormat::Table => {
            let rows = summary
                .rows
                .iter()
                .filter(|v| v.percent.is_nan() || v.percent >= config.min_percentage)
                .cloned()
                .collect::<Vec<_>>();
            print_summary(out, &rows, summary.total)?;
            if let Some(totals) = totals {
                writeln!(out)?;
                print_totals(out, &totals)?;
            }
        }
        OutputFormat::Json => {
            print_json(out, range, &config.category, &summary, totals.as_deref())?;
        }
    }
    Ok(())
}
