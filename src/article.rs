//! Article records and dataset file naming.
//!
//! Every article of a dataset is a pair of files sharing a numeric identifier:
//! `{id}_raw.txt` holds the extracted text, `{id}_meta.json` holds the metadata
//! written by the scraper.
use std::path::{Path, PathBuf};

use crate::metadata::ArticleMeta;
use crate::transformers::View;

/// Suffix of raw text files.
pub const RAW_SUFFIX: &str = "_raw.txt";
/// Suffix of metadata files.
pub const META_SUFFIX: &str = "_meta.json";

/// Extract the leading run of ASCII digits of a file name as an identifier.
///
/// Returns [None] if the name does not start with a digit,
/// or if the digit run does not fit in a [u32].
pub fn leading_id(name: &str) -> Option<u32> {
    let end = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(idx, _)| idx)
        .unwrap_or(name.len());

    if end == 0 {
        return None;
    }
    name[..end].parse().ok()
}

/// Path of the raw text file of article `id` in `dir`.
pub fn raw_path(dir: &Path, id: u32) -> PathBuf {
    dir.join(format!("{}{}", id, RAW_SUFFIX))
}

/// Path of the metadata file of article `id` in `dir`.
pub fn meta_path(dir: &Path, id: u32) -> PathBuf {
    dir.join(format!("{}{}", id, META_SUFFIX))
}

/// A single article of the corpus.
///
/// Created empty by [crate::io::reader::CorpusRegistry], then filled by the pipeline:
/// raw text first, then the three serialized views, which are released once written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleRecord {
    id: u32,
    raw_text: Option<String>,
    meta: Option<ArticleMeta>,
    cleaned: Option<String>,
    single_tagged: Option<String>,
    multiple_tagged: Option<String>,
}

impl ArticleRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Get the article's identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get a reference to the article's raw text, if already attached.
    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn set_raw_text(&mut self, raw_text: String) {
        self.raw_text = Some(raw_text);
    }

    /// Get a reference to the article's metadata, if any.
    pub fn meta(&self) -> Option<&ArticleMeta> {
        self.meta.as_ref()
    }

    pub fn set_meta(&mut self, meta: Option<ArticleMeta>) {
        self.meta = meta;
    }

    /// Get a serialized view of the article, if already computed.
    pub fn view(&self, view: View) -> Option<&str> {
        match view {
            View::Cleaned => self.cleaned.as_deref(),
            View::SingleTagged => self.single_tagged.as_deref(),
            View::MultipleTagged => self.multiple_tagged.as_deref(),
        }
    }

    pub fn set_view(&mut self, view: View, text: String) {
        let slot = match view {
            View::Cleaned => &mut self.cleaned,
            View::SingleTagged => &mut self.single_tagged,
            View::MultipleTagged => &mut self.multiple_tagged,
        };
        *slot = Some(text);
    }

    /// Drop raw text and views once they are persisted. Metadata is kept.
    pub fn release_text(&mut self) {
        self.raw_text = None;
        self.cleaned = None;
        self.single_tagged = None;
        self.multiple_tagged = None;
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn leading_digits() {
        assert_eq!(leading_id("1_raw.txt"), Some(1));
        assert_eq!(leading_id("42_meta.json"), Some(42));
        assert_eq!(leading_id("007"), Some(7));
        assert_eq!(leading_id("12abc"), Some(12));
    }

    #[test]
    fn no_leading_digits() {
        assert_eq!(leading_id("raw_1.txt"), None);
        assert_eq!(leading_id(""), None);
        assert_eq!(leading_id(".DS_Store"), None);
        assert_eq!(leading_id("99999999999999_raw.txt"), None);
    }

    #[test]
    fn file_names() {
        let dir = Path::new("assets");
        assert_eq!(raw_path(dir, 3), Path::new("assets/3_raw.txt"));
        assert_eq!(meta_path(dir, 3), Path::new("assets/3_meta.json"));
    }

    #[test]
    fn views() {
        let mut a = ArticleRecord::new(1);
        assert_eq!(a.view(View::Cleaned), None);
        a.set_view(View::SingleTagged, "foo<bar>".to_string());
        assert_eq!(a.view(View::SingleTagged), Some("foo<bar>"));
        assert_eq!(a.view(View::MultipleTagged), None);
    }

    #[test]
    fn release_keeps_meta() {
        let mut a = ArticleRecord::new(1);
        a.set_meta(Some(ArticleMeta::default()));
        a.set_raw_text("Мама мыла раму.".to_string());
        for view in View::ALL {
            a.set_view(view, "мама".to_string());
        }

        a.release_text();
        assert_eq!(a.raw_text(), None);
        assert!(View::ALL.iter().all(|view| a.view(*view).is_none()));
        assert!(a.meta().is_some());
    }
}
