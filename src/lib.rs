//! # morphcorpus
//!
//! Morphological annotation of a small article corpus.
//!
//! A dataset is a folder of `{id}_raw.txt`/`{id}_meta.json` pairs numbered from 1,
//! as produced by the corpus scraper. This crate:
//!
//! - validates that the dataset is complete and contiguous ([processing::validate]),
//! - annotates each article's tokens with lemma and morphological tags ([transformers::Annotator]),
//! - saves three views of each article ([pipelines::AnnotationPipeline]):
//!   `{id}_cleaned.txt`, `{id}_single_tagged.txt` and `{id}_multiple_tagged.txt`.
//!
//! Taggers are pluggable through [taggers::LemmaTagger] and [taggers::MorphTagger].
pub mod article;
pub mod error;
pub mod filtering;
pub mod io;
pub mod metadata;
pub mod pipelines;
pub mod processing;
pub mod taggers;
pub mod transformers;
