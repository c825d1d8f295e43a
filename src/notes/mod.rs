pub mod analysis;
pub mod entities;
pub mod error;
pub mod extract;
pub mod selector;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use tracing::debug;

use entities::TimeEntry;
use extract::extract_time_entries;

/// Name a note's entries are tagged with: the file name without its last extension.
pub fn note_label(path: &Path) -> String {
    path.file_stem()
        .map(|v| v.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Reads every note in turn and collects their time entries.
pub fn read_entries(files: &[impl AsRef<Path>]) -> Result<Vec<TimeEntry>> {
    let mut entries = vec![];
    for path in files {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read note {path:?}"))?;
        let found = extract_time_entries(&contents, &note_label(path));
        debug!("Extracted {} entries from {path:?}", found.len());
        entries.extend(found);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use anyhow::Result;
    use tempfile::tempdir;

    use super::{note_label, read_entries};

    #[test]
    fn test_note_label() {
        assert_eq!(note_label(Path::new("/notes/2024-01-15.md")), "2024-01-15");
        assert_eq!(note_label(Path::new("2024-01-15.daily.md")), "2024-01-15.daily");
    }

    #[test]
    fn test_read_entries() -> Result<()> {
        let dir = tempdir()?;
        let first = dir.path().join("2024-01-01.md");
        let second = dir.path().join("2024-01-02.md");
        fs::write(&first, "Time.Area.Eng: 2.0\nTime.Area.Sales: 3.0\n")?;
        fs::write(&second, "Nothing tracked\nTime.Area.Eng: 1.0\n")?;

        let entries = read_entries(&[first, second])?;

        assert_eq!(entries.len(), 3);
        assert_eq!(&*entries[0].source_file, "2024-01-01");
        assert_eq!(&*entries[2].source_file, "2024-01-02");
        assert_eq!(entries[2].hours, 1.);
        Ok(())
    }

    #[test]
    fn test_read_entries_missing_file() -> Result<()> {
        let dir = tempdir()?;
        assert!(read_entries(&[dir.path().join("2024-01-01.md")]).is_err());
        Ok(())
    }
}
