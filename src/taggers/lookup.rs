/*! Dictionary-backed taggers

Taggers that answer from in-memory dictionaries keyed by lowercased word.
Useful for offline runs on a known vocabulary and for testing.

Dictionaries can be loaded from JSON files:
- lemmas: `{"мама": {"lex": "мама", "gr": "S,жен,од=им,ед"}}`
- parses: `{"мама": [{"tag": "NOUN,anim,femn sing,nomn", "score": 1.0}]}`
!*/
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use unicode_segmentation::UnicodeSegmentation;

use super::{LemmaAnalysis, LemmaCandidate, LemmaTagger, MorphParse, MorphTagger};
use crate::error::Error;

#[derive(Debug, Default)]
pub struct LookupLemmatizer {
    entries: HashMap<String, LemmaCandidate>,
}

impl LookupLemmatizer {
    pub fn new(entries: HashMap<String, LemmaCandidate>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, candidate)| (word.to_lowercase(), candidate))
            .collect();
        Self { entries }
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let entries: HashMap<String, LemmaCandidate> = serde_json::from_reader(reader)?;
        info!("loaded {} lemmas from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    pub fn insert(&mut self, word: &str, candidate: LemmaCandidate) {
        self.entries.insert(word.to_lowercase(), candidate);
    }
}

impl LemmaTagger for LookupLemmatizer {
    /// Every segment (words, spaces, punctuation) is reported,
    /// only known words get an analysis.
    fn analyze(&self, text: &str) -> Result<Vec<LemmaAnalysis>, Error> {
        let analyses = text
            .split_word_bounds()
            .map(|segment| {
                let analysis = self
                    .entries
                    .get(&segment.to_lowercase())
                    .cloned()
                    .into_iter()
                    .collect();
                LemmaAnalysis::new(segment, analysis)
            })
            .collect();
        Ok(analyses)
    }
}

#[derive(Debug, Default)]
pub struct LookupMorphology {
    entries: HashMap<String, Vec<MorphParse>>,
}

impl LookupMorphology {
    pub fn new(entries: HashMap<String, Vec<MorphParse>>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, parses)| (word.to_lowercase(), parses))
            .collect();
        Self { entries }
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let entries: HashMap<String, Vec<MorphParse>> = serde_json::from_reader(reader)?;
        info!("loaded {} parses from {:?}", entries.len(), path);
        Ok(Self::new(entries))
    }

    pub fn insert(&mut self, word: &str, parses: Vec<MorphParse>) {
        self.entries.insert(word.to_lowercase(), parses);
    }
}

impl MorphTagger for LookupMorphology {
    fn parse(&self, token: &str) -> Result<Vec<MorphParse>, Error> {
        Ok(self
            .entries
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
