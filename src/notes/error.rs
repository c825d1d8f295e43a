use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateParseError {
    /// One of the bounds of a requested range.
    #[error("{reason}: {input:?}")]
    Bound { input: String, reason: String },

    /// The date stamp of a note file.
    #[error("can't read a date from note {path:?} ({input:?}): {reason}")]
    FileName {
        path: PathBuf,
        input: String,
        reason: String,
    },
}
