use std::sync::Arc;

use super::entities::TimeEntry;

/// Category used for the primary summary.
pub const AREA: &str = "Area";
/// Category describing the kind of work. Extracted like any other category.
pub const FOCUS: &str = "Focus";

const MARKER: &str = "Time.";

/// A single `Time.<Category>.<Name>: <Hours>` match, borrowed from the scanned text.
#[derive(Debug, PartialEq)]
pub struct RawEntry<'a> {
    pub category: &'a str,
    pub name: &'a str,
    pub hours: f64,
}

/// Finds every time entry in a blob of text.
///
/// Matches are not anchored to lines: the marker may appear anywhere, surrounded by any text.
/// `Category` is a run of word characters, `Name` is the shortest run of non newline
/// characters followed by `:`, optional whitespace and a number. Numbers are digits optionally
/// followed by a dot and a single digit, anything after that is left unread. After a match
/// scanning continues right after the number, after a failed candidate it continues one
/// character past the start of the marker.
pub struct EntryScanner<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> EntryScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    /// Attempts a match with the marker starting at `start`. Returns the entry and the byte
    /// offset right after it.
    fn match_at(&self, start: usize) -> Option<(RawEntry<'a>, usize)> {
        let category_start = start + MARKER.len();
        let category_len = self.text[category_start..]
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(self.text.len() - category_start);
        if category_len == 0 {
            return None;
        }
        let category_end = category_start + category_len;
        if !self.text[category_end..].starts_with('.') {
            return None;
        }

        let name_start = category_end + 1;
        for (offset, c) in self.text[name_start..].char_indices() {
            if offset > 0 {
                if let Some((hours, end)) = self.hours_at(name_start + offset) {
                    let entry = RawEntry {
                        category: &self.text[category_start..category_end],
                        name: &self.text[name_start..name_start + offset],
                        hours,
                    };
                    return Some((entry, end));
                }
            }
            if c == '\n' {
                return None;
            }
        }
        None
    }

    /// Reads `:<whitespace>*<number>` starting at `start`.
    fn hours_at(&self, start: usize) -> Option<(f64, usize)> {
        let rest = self.text[start..].strip_prefix(':')?;
        let number_start = start + 1 + (rest.len() - rest.trim_start().len());
        let bytes = self.text.as_bytes();

        let mut end = number_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == number_start {
            return None;
        }
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            if end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }

        // `3.` is a valid number here but not for every float parser
        let literal = self.text[number_start..end].trim_end_matches('.');
        literal.parse::<f64>().ok().map(|hours| (hours, end))
    }
}

impl<'a> Iterator for EntryScanner<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(found) = self.text[self.position..].find(MARKER) {
            let start = self.position + found;
            match self.match_at(start) {
                Some((entry, end)) => {
                    self.position = end;
                    return Some(entry);
                }
                // The marker is ASCII, so the next byte is a char boundary
                None => self.position = start + 1,
            }
        }
        self.position = self.text.len();
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Extracts every time entry from `text`, tagging it with `source`.
pub fn extract_time_entries(text: &str, source: &str) -> Vec<TimeEntry> {
    let source: Arc<str> = source.into();
    EntryScanner::new(text)
        .map(|v| TimeEntry::new(source.clone(), v.category, v.name, v.hours))
        .collect()
}

/// Same as [extract_time_entries] but keeps only entries of a single category.
pub fn extract_category(text: &str, source: &str, category: &str) -> Vec<TimeEntry> {
    extract_time_entries(text, source)
        .into_iter()
        .filter(|v| v.is_category(category))
        .collect()
}
