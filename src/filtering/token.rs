//! Token-level filtering.
//!
//! Tokens are kept (`detect` returns `true`) only if taggers gave something usable for them.
use super::Filter;
use crate::taggers::{LemmaAnalysis, MorphParse};

/// Keeps analyses whose first candidate has both a lemma and a grammar tag.
#[derive(Debug, Default)]
pub struct HasAnalysis;

impl Filter<&LemmaAnalysis> for HasAnalysis {
    fn detect(&self, item: &LemmaAnalysis) -> bool {
        item.analysis
            .first()
            .and_then(|candidate| candidate.lemma_and_tag())
            .is_some()
    }
}

/// Keeps analyses that have a non-empty surface text.
#[derive(Debug, Default)]
pub struct HasSurface;

impl Filter<&LemmaAnalysis> for HasSurface {
    fn detect(&self, item: &LemmaAnalysis) -> bool {
        item.surface().is_some()
    }
}

/// Keeps tokens that got at least one morphological parse.
#[derive(Debug, Default)]
pub struct HasParse;

impl Filter<&[MorphParse]> for HasParse {
    fn detect(&self, item: &[MorphParse]) -> bool {
        !item.is_empty()
    }
}

/// Default lemma-level filter: [HasAnalysis] and [HasSurface].
#[derive(Debug, Default)]
pub struct LemmaFilter {
    analysis: HasAnalysis,
    surface: HasSurface,
}

impl Filter<&LemmaAnalysis> for LemmaFilter {
    fn detect(&self, item: &LemmaAnalysis) -> bool {
        self.analysis.detect(item) && self.surface.detect(item)
    }
}
