/*! Tagger traits

All taggers should implement [LemmaTagger] or [MorphTagger] to be useable in annotation.
!*/
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A lemma/grammar candidate for a surface token.
///
/// Field names follow mystem's JSON output (`lex`, `gr`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaCandidate {
    #[serde(default)]
    pub lex: Option<String>,
    #[serde(default)]
    pub gr: Option<String>,
}

impl LemmaCandidate {
    pub fn new(lex: &str, gr: &str) -> Self {
        Self {
            lex: Some(lex.to_string()),
            gr: Some(gr.to_string()),
        }
    }

    /// Get lemma and grammar tag, if both are present and non-empty.
    pub fn lemma_and_tag(&self) -> Option<(&str, &str)> {
        match (self.lex.as_deref(), self.gr.as_deref()) {
            (Some(lex), Some(gr)) if !lex.is_empty() && !gr.is_empty() => Some((lex, gr)),
            _ => None,
        }
    }
}

/// Analysis of a single surface token.
///
/// Whitespace, punctuation and unknown tokens come with an empty `analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LemmaAnalysis {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub analysis: Vec<LemmaCandidate>,
}

impl LemmaAnalysis {
    pub fn new(text: &str, analysis: Vec<LemmaCandidate>) -> Self {
        Self {
            text: Some(text.to_string()),
            analysis,
        }
    }

    /// Get the surface text, if present and non-empty.
    pub fn surface(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

/// A morphological parse candidate and its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphParse {
    pub tag: String,
    #[serde(default)]
    pub score: f64,
}

impl MorphParse {
    pub fn new(tag: &str, score: f64) -> Self {
        Self {
            tag: tag.to_string(),
            score,
        }
    }
}

/// Splits text into surface tokens, each with its lemma candidates.
pub trait LemmaTagger {
    fn analyze(&self, text: &str) -> Result<Vec<LemmaAnalysis>, Error>;
}

/// Gives morphological parse candidates of a surface token.
pub trait MorphTagger {
    /// Returns candidates, best first. May be empty.
    fn parse(&self, token: &str) -> Result<Vec<MorphParse>, Error>;
}

/// Pick the highest-scoring parse. Ties go to the first one.
pub fn best_parse(parses: &[MorphParse]) -> Option<&MorphParse> {
    parses
        .iter()
        .reduce(|best, parse| if parse.score > best.score { parse } else { best })
}
