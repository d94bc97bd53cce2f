/*! Dataset validation

A dataset is a folder holding, for each identifier `i` in `1..=N`,
a `{i}_raw.txt` file (non-empty) and a `{i}_meta.json` file.

Validation stops at the first inconsistency found and never touches the files.
!*/
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::article::{self, leading_id, RAW_SUFFIX};
use crate::error::Error;
use crate::io::reader::{entry_name, list_entries};

/// File pair of a single article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFiles {
    pub raw: PathBuf,
    pub meta: PathBuf,
}

/// A validated dataset: identifiers `1..=N` mapped to their file pairs.
#[derive(Debug, Clone)]
pub struct DatasetDirectory {
    root: PathBuf,
    files: BTreeMap<u32, ArticleFiles>,
}

impl DatasetDirectory {
    /// Get a reference to the dataset's root folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the file pairs, ordered by identifier.
    pub fn files(&self) -> &BTreeMap<u32, ArticleFiles> {
        &self.files
    }

    /// Number of articles in the dataset.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Check that `path` holds a complete, contiguous and non-empty dataset.
pub fn validate(path: &Path) -> Result<(), Error> {
    validate_dataset(path).map(|_| ())
}

/// Same as [validate], returning the established identifier -> file pair mapping.
pub fn validate_dataset(path: &Path) -> Result<DatasetDirectory, Error> {
    if !path.exists() {
        return Err(Error::PathNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }

    let mut ids = BTreeSet::new();
    for entry in list_entries(path)? {
        let name = entry_name(&entry).ok_or_else(|| {
            Error::InconsistentDataset(format!("invalid file name: {:?}", entry))
        })?;
        debug!("checking {:?}", entry);

        if name.ends_with(RAW_SUFFIX) && is_empty_file(&entry)? {
            return Err(Error::InconsistentDataset(format!(
                "empty raw file: {:?}",
                entry
            )));
        }

        match leading_id(name) {
            Some(id) => {
                ids.insert(id);
            }
            None => {
                return Err(Error::InconsistentDataset(format!(
                    "file name does not start with an identifier: {:?}",
                    entry
                )))
            }
        }
    }

    if ids.is_empty() {
        return Err(Error::EmptyDirectory(path.to_path_buf()));
    }

    // ids are sorted and distinct, so 1..=N is the only valid sequence
    let mut previous = 0;
    let mut files = BTreeMap::new();
    for id in ids {
        if id != previous + 1 {
            return Err(Error::InconsistentDataset(if previous == 0 {
                format!("numbering starts at {} instead of 1", id)
            } else {
                format!("numbering gap between {} and {}", previous, id)
            }));
        }
        previous = id;

        let raw = article::raw_path(path, id);
        let meta = article::meta_path(path, id);
        if !raw.is_file() {
            return Err(Error::InconsistentDataset(format!(
                "missing raw file for article {}",
                id
            )));
        }
        if !meta.is_file() {
            return Err(Error::InconsistentDataset(format!(
                "missing meta file for article {}",
                id
            )));
        }
        if is_empty_file(&raw)? {
            return Err(Error::InconsistentDataset(format!(
                "empty raw file: {:?}",
                raw
            )));
        }

        files.insert(id, ArticleFiles { raw, meta });
    }

    info!("dataset {:?} is valid ({} articles)", path, files.len());
    Ok(DatasetDirectory {
        root: path.to_path_buf(),
        files,
    })
}

#[inline]
fn is_empty_file(path: &Path) -> Result<bool, Error> {
    Ok(std::fs::metadata(path)?.len() == 0)
}
