/*! Corpus registry

Holds an [ArticleRecord] for each identifier found in a dataset folder.

The folder is expected to be validated beforehand (see [crate::processing::validate]).
!*/
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;

use crate::article::{leading_id, ArticleRecord};
use crate::error::Error;

use super::{entry_name, list_entries};

pub struct CorpusRegistry {
    path: PathBuf,
    storage: BTreeMap<u32, ArticleRecord>,
}

impl CorpusRegistry {
    /// Create an empty registry over `path`. Nothing is read until [CorpusRegistry::scan].
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            storage: BTreeMap::new(),
        }
    }

    /// Create a registry and scan `path` right away.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let mut registry = Self::new(path);
        registry.scan()?;
        Ok(registry)
    }

    /// Register an empty [ArticleRecord] for each entry starting with an identifier.
    ///
    /// Entries that do not start with a digit are ignored.
    pub fn scan(&mut self) -> Result<(), Error> {
        for entry in list_entries(&self.path)? {
            match entry_name(&entry).and_then(leading_id) {
                Some(id) => {
                    self.storage
                        .entry(id)
                        .or_insert_with(|| ArticleRecord::new(id));
                }
                None => debug!("ignoring {:?}", entry),
            }
        }
        debug!("registered {} articles", self.storage.len());
        Ok(())
    }

    /// Get the registered articles, ordered by identifier.
    pub fn get_articles(&self) -> &BTreeMap<u32, ArticleRecord> {
        &self.storage
    }

    pub fn get_articles_mut(&mut self) -> &mut BTreeMap<u32, ArticleRecord> {
        &mut self.storage
    }

    /// Get a reference to the registry's path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
