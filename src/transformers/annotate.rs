//! Annotate trait
use log::debug;

use super::{Normalization, TokenAnnotation, Transform};
use crate::error::Error;
use crate::filtering::{Filter, HasParse, LemmaFilter};
use crate::taggers::{best_parse, LemmaTagger, MorphTagger};

/// Annotations provide linguistic information about raw text.
pub trait Annotate {
    fn annotate(&self, raw_text: &str) -> Result<Vec<TokenAnnotation>, Error>;
}

/// Annotates text with a lemma tagger and a morphology tagger.
///
/// Tokens are kept in the lemma tagger's order.
/// A token is dropped if the lemma tagger has no analysis for it,
/// or if the morphology tagger has no parse for it.
/// Tagger errors are not recovered from.
pub struct Annotator {
    lemmatizer: Box<dyn LemmaTagger>,
    morphology: Box<dyn MorphTagger>,
    normalization: Normalization,
    lemma_filter: LemmaFilter,
    parse_filter: HasParse,
}

impl Annotator {
    pub fn new(lemmatizer: Box<dyn LemmaTagger>, morphology: Box<dyn MorphTagger>) -> Self {
        Self {
            lemmatizer,
            morphology,
            normalization: Normalization::default(),
            lemma_filter: LemmaFilter::default(),
            parse_filter: HasParse,
        }
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Get the annotator's normalization policy.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }
}

impl Annotate for Annotator {
    fn annotate(&self, raw_text: &str) -> Result<Vec<TokenAnnotation>, Error> {
        let text = self.normalization.transform(raw_text);
        let analyses = self.lemmatizer.analyze(&text)?;

        let mut tokens = Vec::new();
        for item in analyses.iter().filter(|item| self.lemma_filter.detect(*item)) {
            // both guaranteed by the lemma filter
            let surface = item
                .surface()
                .ok_or_else(|| Error::Custom("filtered token has no surface".to_string()))?;
            let (lemma, lemma_tag) = item
                .analysis
                .first()
                .and_then(|candidate| candidate.lemma_and_tag())
                .ok_or_else(|| Error::Custom(format!("filtered token {:?} has no lemma", surface)))?;

            let parses = self.morphology.parse(surface)?;
            let parse = match best_parse(&parses) {
                Some(parse) if self.parse_filter.detect(&parses[..]) => parse,
                _ => {
                    debug!("no parse for {:?}, dropping", surface);
                    continue;
                }
            };

            tokens.push(TokenAnnotation::new(surface, lemma, lemma_tag, &parse.tag));
        }

        debug!(
            "{} tokens annotated out of {} tagger items",
            tokens.len(),
            analyses.len()
        );
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::taggers::{
        LemmaAnalysis, LemmaCandidate, LookupLemmatizer, LookupMorphology, MorphParse,
    };

    fn taggers() -> (LookupLemmatizer, LookupMorphology) {
        let mut l = LookupLemmatizer::default();
        l.insert("мама", LemmaCandidate::new("мама", "S,жен,од=им,ед"));
        l.insert("мыла", LemmaCandidate::new("мыть", "V,несов,пе=прош,ед,изъяв,жен"));
        l.insert("раму", LemmaCandidate::new("рама", "S,жен,неод=вин,ед"));

        let mut m = LookupMorphology::default();
        m.insert("мама", vec![MorphParse::new("NOUN,anim,femn sing,nomn", 1.0)]);
        m.insert(
            "мыла",
            vec![
                MorphParse::new("NOUN,inan,neut sing,gent", 0.4),
                MorphParse::new("VERB,impf,tran femn,sing,past,indc", 0.6),
            ],
        );
        m.insert("раму", vec![MorphParse::new("NOUN,inan,femn sing,accs", 1.0)]);
        (l, m)
    }

    fn annotator() -> Annotator {
        let (l, m) = taggers();
        Annotator::new(Box::new(l), Box::new(m))
    }

    #[test]
    fn annotate_sentence() {
        let tokens = annotator().annotate("Мама мыла раму.").unwrap();

        assert_eq!(
            tokens,
            vec![
                TokenAnnotation::new("Мама", "мама", "S,жен,од=им,ед", "NOUN,anim,femn sing,nomn"),
                TokenAnnotation::new(
                    "мыла",
                    "мыть",
                    "V,несов,пе=прош,ед,изъяв,жен",
                    "VERB,impf,tran femn,sing,past,indc"
                ),
                TokenAnnotation::new("раму", "рама", "S,жен,неод=вин,ед", "NOUN,inan,femn sing,accs"),
            ]
        );
    }

    #[test]
    fn idempotent() {
        let a = annotator();
        let text = "Мама мыла раму, мама мыла раму.";
        assert_eq!(a.annotate(text).unwrap(), a.annotate(text).unwrap());
    }

    #[test]
    fn drop_unknown_lemma() {
        let tokens = annotator().annotate("Папа мыл раму").unwrap();
        let originals: Vec<&str> = tokens.iter().map(|t| t.original()).collect();
        assert_eq!(originals, vec!["раму"]);
    }

    #[test]
    fn drop_missing_parse() {
        let (mut l, m) = taggers();
        l.insert("рамой", LemmaCandidate::new("рама", "S,жен,неод=твор,ед"));
        let a = Annotator::new(Box::new(l), Box::new(m));

        let tokens = a.annotate("мама рамой").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].original(), "мама");
    }

    #[test]
    fn drop_incomplete_candidate() {
        let (mut l, m) = taggers();
        l.insert(
            "рамой",
            LemmaCandidate {
                lex: Some("рама".to_string()),
                gr: None,
            },
        );
        let a = Annotator::new(Box::new(l), Box::new(m));

        let tokens = a.annotate("рамой мама").unwrap();
        let originals: Vec<&str> = tokens.iter().map(|t| t.original()).collect();
        assert_eq!(originals, vec!["мама"]);
    }

    #[test]
    fn letters_only_normalization() {
        let a = annotator().with_normalization(Normalization::letters_only());
        let tokens = a.annotate("Мама\n(1) мыла -- раму!").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn strip_newlines_glues_lines() {
        // "мыла\nраму" becomes "мылараму", unknown to the lemmatizer
        let tokens = annotator().annotate("мама мыла\nраму").unwrap();
        assert_eq!(tokens.len(), 1);
    }

    /// Lemma tagger reporting what it was given.
    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl LemmaTagger for Recorder {
        fn analyze(&self, text: &str) -> Result<Vec<LemmaAnalysis>, Error> {
            self.seen.borrow_mut().push(text.to_string());
            Ok(vec![
                LemmaAnalysis {
                    text: None,
                    analysis: vec![LemmaCandidate::new("x", "X")],
                },
                LemmaAnalysis::new("y", vec![]),
            ])
        }
    }

    impl LemmaTagger for Rc<Recorder> {
        fn analyze(&self, text: &str) -> Result<Vec<LemmaAnalysis>, Error> {
            self.as_ref().analyze(text)
        }
    }

    #[test]
    fn normalized_text_reaches_tagger() {
        let recorder = Rc::new(Recorder {
            seen: RefCell::new(vec![]),
        });

        let a = Annotator::new(
            Box::new(recorder.clone()),
            Box::new(LookupMorphology::default()),
        );
        let tokens = a.annotate("line one\nline two").unwrap();

        assert!(tokens.is_empty());
        assert_eq!(*recorder.seen.borrow(), vec!["line oneline two".to_string()]);
    }

    struct Unavailable;
    impl MorphTagger for Unavailable {
        fn parse(&self, _token: &str) -> Result<Vec<MorphParse>, Error> {
            Err(Error::Tagger("service unavailable".to_string()))
        }
    }

    #[test]
    fn tagger_error_propagates() {
        let (l, _) = taggers();
        let a = Annotator::new(Box::new(l), Box::new(Unavailable));
        assert!(matches!(a.annotate("мама"), Err(Error::Tagger(_))));
    }
}
