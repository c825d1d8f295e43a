use std::{fmt::Display, io::Write};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::notes::{
    analysis::{AreaRow, AreaSummary, TotalRow},
    entities::DateRange,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

/// Writes a markdown (GitHub flavoured) table. Headers get at least one extra space of padding
/// on each side, numbers are right aligned.
fn write_table(out: &mut impl Write, columns: &[Column], rows: &[Vec<String>]) -> Result<()> {
    let widths = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .fold(column.header.len() + 2, usize::max)
        })
        .collect::<Vec<_>>();

    let line = |cells: Vec<&str>| {
        let cells = cells
            .into_iter()
            .zip(columns)
            .zip(&widths)
            .map(|((cell, column), &width)| match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect::<Vec<_>>();
        format!("| {} |", cells.join(" | "))
    };

    writeln!(out, "{}", line(columns.iter().map(|v| v.header).collect()))?;
    let separator = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>();
    writeln!(out, "|{}|", separator.join("|"))?;
    for row in rows {
        writeln!(out, "{}", line(row.iter().map(String::as_str).collect()))?;
    }
    Ok(())
}

/// Prints area rows followed by the total hours.
pub fn print_summary(out: &mut impl Write, rows: &[AreaRow], total: f64) -> Result<()> {
    let columns = [
        Column {
            header: "Name",
            align: Align::Left,
        },
        Column {
            header: "Hours",
            align: Align::Right,
        },
        Column {
            header: "Percent",
            align: Align::Right,
        },
    ];
    let rows = rows
        .iter()
        .map(|v| {
            vec![
                v.name.to_string(),
                format!("{:.1}", v.hours),
                format!("{:.2}", *v.percent),
            ]
        })
        .collect::<Vec<_>>();
    write_table(out, &columns, &rows)?;
    writeln!(out)?;
    // Debug keeps the decimal point on whole numbers, so 6 hours print as `6.0`
    writeln!(out, "Total hours: {total:?}")?;
    Ok(())
}

pub fn print_totals(out: &mut impl Write, totals: &[TotalRow]) -> Result<()> {
    let columns = [
        Column {
            header: "Category",
            align: Align::Left,
        },
        Column {
            header: "Name",
            align: Align::Left,
        },
        Column {
            header: "Hours",
            align: Align::Right,
        },
    ];
    let rows = totals
        .iter()
        .map(|v| {
            vec![
                v.category.to_string(),
                v.name.to_string(),
                format!("{:.1}", v.hours),
            ]
        })
        .collect::<Vec<_>>();
    write_table(out, &columns, &rows)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    range: DateRange,
    category: &'a str,
    summary: &'a AreaSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    totals: Option<&'a [TotalRow]>,
}

pub fn print_json(
    out: &mut impl Write,
    range: DateRange,
    category: &str,
    summary: &AreaSummary,
    totals: Option<&[TotalRow]>,
) -> Result<()> {
    serde_json::to_writer_pretty(
        &mut *out,
        &JsonReport {
            range,
            category,
            summary,
            totals,
        },
    )?;
    writeln!(out)?;
    Ok(())
}
