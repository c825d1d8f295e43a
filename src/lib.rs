//! Summarizes time tracking entries kept in daily notes.
//!
//! Notes are markdown files named after the day they were written (`2024-01-15.md`). Any
//! `Time.<Category>.<Name>: <Hours>` found in them is counted, and hours are then grouped by
//! name within a category (`Area` by default) over a range of days.
//!

pub mod cli;
pub mod notes;
pub mod utils;
