//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Dataset root does not exist.
    PathNotFound(PathBuf),
    /// Dataset root exists but is not a directory.
    NotADirectory(PathBuf),
    /// No file in the dataset root carries an identifier.
    EmptyDirectory(PathBuf),
    /// Numbering gap, missing file pair, empty raw file or unparsable filename.
    InconsistentDataset(String),
    /// A lemma or morphology tagger failed.
    Tagger(String),
    Io(std::io::Error),
    Serde(serde_json::Error),
    Http(reqwest::Error),
    Url(url::ParseError),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PathNotFound(p) => write!(f, "dataset path not found: {:?}", p),
            Error::NotADirectory(p) => write!(f, "dataset path is not a directory: {:?}", p),
            Error::EmptyDirectory(p) => write!(f, "no dataset entries in {:?}", p),
            Error::InconsistentDataset(reason) => write!(f, "inconsistent dataset: {}", reason),
            Error::Tagger(reason) => write!(f, "tagger error: {}", reason),
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Http(e) => write!(f, "http error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::Glob(e) => write!(f, "glob error: {}", e),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {}", e),
            Error::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(v: reqwest::Error) -> Self {
        Self::Http(v)
    }
}

impl From<url::ParseError> for Error {
    fn from(v: url::ParseError) -> Self {
        Self::Url(v)
    }
}
