use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use serde::Serialize;

use crate::utils::percentage::Percentage;

use super::{entities::TimeEntry, extract::AREA};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaRow {
    pub name: Arc<str>,
    pub hours: f64,
    pub percent: Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaSummary {
    pub rows: Vec<AreaRow>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalRow {
    pub category: Arc<str>,
    pub name: Arc<str>,
    pub hours: f64,
}

/// Hours per area, largest first, with each area's share of the total.
pub fn summarize_by_area(entries: &[TimeEntry]) -> AreaSummary {
    summarize_by_category(entries, AREA)
}

/// Groups entries of `category` by name and sums their hours. Rows are sorted by hours
/// descending, equal rows keep the order their names were first seen in. When the total is
/// zero percentages are NaN.
pub fn summarize_by_category(entries: &[TimeEntry], category: &str) -> AreaSummary {
    let mut index = HashMap::<Arc<str>, usize>::new();
    let mut rows = Vec::<AreaRow>::new();

    for entry in entries.iter().filter(|v| v.is_category(category)) {
        let position = *index.entry(entry.name.clone()).or_insert_with(|| {
            rows.push(AreaRow {
                name: entry.name.clone(),
                hours: 0.,
                percent: Percentage::ZERO,
            });
            rows.len() - 1
        });
        rows[position].hours += entry.hours;
    }

    // stable, so ties stay in encounter order
    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));

    let total = rows.iter().map(|v| v.hours).sum::<f64>();
    for row in rows.iter_mut() {
        row.percent = Percentage::of(row.hours, total);
    }
    AreaSummary { rows, total }
}

/// Sum of hours for every `(category, name)` pair, ordered by category and then name.
pub fn summarize_totals(entries: &[TimeEntry]) -> Vec<TotalRow> {
    let mut totals = BTreeMap::<(Arc<str>, Arc<str>), f64>::new();
    for entry in entries {
        *totals
            .entry((entry.category.clone(), entry.name.clone()))
            .or_default() += entry.hours;
    }
    totals
        .into_iter()
        .map(|((category, name), hours)| TotalRow {
            category,
            name,
            hours,
        })
        .collect()
}
