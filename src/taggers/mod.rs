/*! Linguistic taggers

Holds the [LemmaTagger] and [MorphTagger] traits used by [crate::transformers::Annotator],
along with implementations:
- [Mystem] runs the mystem executable,
- [HttpMorphology] queries a morphological analysis service,
- [LookupLemmatizer] and [LookupMorphology] answer from dictionaries.
!*/
mod http;
mod lookup;
mod mystem;
mod tagger;

pub use http::HttpMorphology;
pub use lookup::{LookupLemmatizer, LookupMorphology};
pub use mystem::Mystem;
pub use tagger::{
    best_parse, LemmaAnalysis, LemmaCandidate, LemmaTagger, MorphParse, MorphTagger,
};
