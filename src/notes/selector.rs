use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, instrument, warn};

use crate::utils::time::DateParser;

use super::{entities::DateRange, error::DateParseError};

pub const NOTE_EXTENSION: &str = ".md";

/// What to do with a note whose name doesn't start with a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UndatedNotes {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log a warning and leave the note out.
    Skip,
}

/// Date stamp of a note, i.e. the part of the file name before the first `.`.
pub fn note_date(path: &Path, dates: &DateParser) -> Result<NaiveDate, DateParseError> {
    let file_name = path
        .file_name()
        .map(|v| v.to_string_lossy())
        .unwrap_or_default();
    let stamp = file_name.split('.').next().unwrap_or_default();
    dates.parse(stamp).map_err(|reason| DateParseError::FileName {
        path: path.to_owned(),
        input: stamp.to_string(),
        reason,
    })
}

/// Returns note files directly inside `dir` dated within `range`, sorted by path.
#[instrument(skip(dates))]
pub fn select_files(
    dir: &Path,
    range: &DateRange,
    dates: &DateParser,
    undated: UndatedNotes,
) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    let entries = fs::read_dir(dir).with_context(|| format!("Failed to list notes in {dir:?}"))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list notes in {dir:?}"))?
            .path();
        let is_note = path
            .file_name()
            .is_some_and(|v| v.to_string_lossy().ends_with(NOTE_EXTENSION));
        if !is_note || !path.is_file() {
            continue;
        }

        let date = match note_date(&path, dates) {
            Ok(date) => date,
            Err(e) if undated == UndatedNotes::Skip => {
                warn!("Skipping note {e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        if range.contains(date) {
            debug!("Selected {path:?} dated {date}");
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
