/*! Dataset reading

[CorpusRegistry] indexes the articles of a dataset directory, and [SourceProvider]
implementations fetch their raw text and metadata.
!*/
mod corpus;
mod source;

use std::path::{Path, PathBuf};

use crate::error::Error;

pub use corpus::CorpusRegistry;
pub use source::{FileSource, SourceProvider};

/// List every entry (files and folders) directly under `dir`.
///
/// Entries are listed once and sorted by path, so that scans are reproducible.
pub(crate) fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid dataset path: {:?}", dir)))?;

    // forge pattern for globbing, escaping the folder part
    let pattern = format!("{}/*", glob::Pattern::escape(dir_str));

    let mut entries = glob::glob(&pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    entries.sort();
    Ok(entries)
}

/// Get the file name of an entry as an UTF-8 string.
pub(crate) fn entry_name(entry: &Path) -> Option<&str> {
    entry.file_name().and_then(|name| name.to_str())
}
