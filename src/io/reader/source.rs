//! Raw text and metadata sources.
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use crate::article;
use crate::error::Error;
use crate::metadata::ArticleMeta;

/// Provides article content by identifier.
///
/// Acquisition (crawling, PDF extraction) happens upstream:
/// implementors only have to hand back what has been acquired.
pub trait SourceProvider {
    /// Get the raw text of article `id`.
    fn get_raw_text(&self, id: u32) -> Result<String, Error>;

    /// Get the metadata of article `id`, if the source has any.
    fn get_meta(&self, _id: u32) -> Result<Option<ArticleMeta>, Error> {
        Ok(None)
    }
}

/// Reads articles from a dataset folder (`{id}_raw.txt`, `{id}_meta.json`).
pub struct FileSource {
    src: PathBuf,
}

impl FileSource {
    pub fn new(src: &Path) -> Self {
        Self {
            src: src.to_path_buf(),
        }
    }
}

impl SourceProvider for FileSource {
    fn get_raw_text(&self, id: u32) -> Result<String, Error> {
        let path = article::raw_path(&self.src, id);
        debug!("reading {:?}", path);
        Ok(std::fs::read_to_string(path)?)
    }

    fn get_meta(&self, id: u32) -> Result<Option<ArticleMeta>, Error> {
        let path = article::meta_path(&self.src, id);
        if !path.exists() {
            return Ok(None);
        }

        let reader = BufReader::new(File::open(path)?);
        Ok(Some(serde_json::from_reader(reader)?))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn read_text_and_meta() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1_raw.txt"), "Мама мыла раму.\n").unwrap();
        fs::write(dir.path().join("1_meta.json"), r#"{"title":"Рама"}"#).unwrap();

        let source = FileSource::new(dir.path());
        assert_eq!(source.get_raw_text(1).unwrap(), "Мама мыла раму.\n");

        let meta = source.get_meta(1).unwrap().unwrap();
        assert_eq!(meta.title.as_deref(), Some("Рама"));
    }

    #[test]
    fn missing_meta() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert_eq!(source.get_meta(1).unwrap(), None);
    }

    #[test]
    fn missing_text() {
        let dir = tempdir().unwrap();
        let source = FileSource::new(dir.path());
        assert!(matches!(source.get_raw_text(1), Err(Error::Io(_))));
    }

    #[test]
    fn malformed_meta() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("1_meta.json"), "{not json").unwrap();

        let source = FileSource::new(dir.path());
        assert!(matches!(source.get_meta(1), Err(Error::Serde(_))));
    }
}
