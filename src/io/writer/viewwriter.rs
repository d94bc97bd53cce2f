//! Per-article view files.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::Error;
use crate::transformers::View;

/// Writes article views into `dst`.
pub struct ViewWriter {
    dst: PathBuf,
}

impl ViewWriter {
    /// Create a new [ViewWriter], creating `dst` if it does not exist.
    pub fn new(dst: &Path) -> Result<Self, Error> {
        std::fs::create_dir_all(dst)?;
        Ok(Self {
            dst: dst.to_path_buf(),
        })
    }

    /// Path of the file holding `view` for article `id`.
    pub fn path(&self, id: u32, view: View) -> PathBuf {
        self.dst.join(format!("{}_{}.txt", id, view.suffix()))
    }

    /// Save `text` as the `view` of article `id`, replacing previous content.
    pub fn save_as(&self, id: u32, view: View, text: &str) -> Result<(), Error> {
        let path = self.path(id, view);
        debug!("writing {:?}", path);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        let mut file: File = options.open(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Get a reference to the writer's destination.
    pub fn dst(&self) -> &Path {
        &self.dst
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn save_views() {
        let dir = tempdir().unwrap();
        let w = ViewWriter::new(dir.path()).unwrap();

        w.save_as(1, View::Cleaned, "мама мыла раму").unwrap();
        w.save_as(1, View::SingleTagged, "мама<S>").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("1_cleaned.txt")).unwrap(),
            "мама мыла раму"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("1_single_tagged.txt")).unwrap(),
            "мама<S>"
        );
    }

    #[test]
    fn overwrite() {
        let dir = tempdir().unwrap();
        let w = ViewWriter::new(dir.path()).unwrap();

        w.save_as(2, View::MultipleTagged, "a much longer first content").unwrap();
        w.save_as(2, View::MultipleTagged, "short").unwrap();

        assert_eq!(
            fs::read_to_string(w.path(2, View::MultipleTagged)).unwrap(),
            "short"
        );
    }

    #[test]
    fn create_dst() {
        let dir = tempdir().unwrap();
        let dst = dir.path().join("out").join("views");
        let w = ViewWriter::new(&dst).unwrap();
        w.save_as(1, View::Cleaned, "").unwrap();

        assert!(dst.join("1_cleaned.txt").exists());
    }
}
