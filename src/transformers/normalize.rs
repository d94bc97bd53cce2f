/*! Raw text normalization

Decides what reaches the lemma tagger:
- [Normalization::StripNewlines] only removes line breaks, so punctuation and digits
  are tagged (and later dropped if the tagger has no analysis for them).
- [Normalization::LettersOnly] keeps runs of letters of a given script, joined by single spaces.
  Combining marks (e.g. stress marks) are dropped without splitting words.
!*/
use std::fmt;
use std::str::FromStr;

use unic_ucd::GeneralCategory;
use unicode_script::{Script, UnicodeScript};

use super::Transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    StripNewlines,
    LettersOnly(Script),
}

impl Normalization {
    /// Letters-only policy for Cyrillic text.
    pub fn letters_only() -> Self {
        Self::LettersOnly(Script::Cyrillic)
    }

    fn strip_newlines(text: &str) -> String {
        text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect()
    }

    fn keep_letters(text: &str, script: Script) -> String {
        let mut normalized = String::with_capacity(text.len());
        let mut in_run = false;

        for c in text.chars() {
            let category = GeneralCategory::of(c);
            if category.is_letter() && c.script() == script {
                if !in_run && !normalized.is_empty() {
                    normalized.push(' ');
                }
                normalized.push(c);
                in_run = true;
            } else if !(in_run && category.is_mark()) {
                in_run = false;
            }
        }
        normalized
    }
}

impl Transform for Normalization {
    fn transform(&self, text: &str) -> String {
        match self {
            Self::StripNewlines => Self::strip_newlines(text),
            Self::LettersOnly(script) => Self::keep_letters(text, *script),
        }
    }
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strip-newlines" => Ok(Self::StripNewlines),
            "letters-only" => Ok(Self::letters_only()),
            other => Err(format!(
                "unknown normalization {:?} (expected strip-newlines or letters-only)",
                other
            )),
        }
    }
}

impl fmt::Display for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StripNewlines => write!(f, "strip-newlines"),
            Self::LettersOnly(script) => write!(f, "letters-only ({})", script.full_name()),
        }
    }
}
