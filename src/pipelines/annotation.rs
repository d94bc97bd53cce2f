//! Corpus annotation pipeline
//!
//! # Processing
//! 1. The dataset folder is validated. Nothing is written if validation fails.
//! 1. Articles are registered, then processed one after the other, by identifier.
//! 1. For each article, raw text is fetched from the [SourceProvider] and annotated.
//! 1. Annotations are serialized into three views (cleaned, single tagged, multiple tagged)
//!   that are saved in the destination folder.
//!
//! Any error stops the run. Views of articles processed before the error are kept.
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::error::Error;
use crate::io::reader::{CorpusRegistry, FileSource, SourceProvider};
use crate::io::writer::ViewWriter;
use crate::pipelines::pipeline::Pipeline;
use crate::processing::validate;
use crate::transformers::{Annotate, Annotator, View};

/// Outcome of a run: number of annotated tokens for each article.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    articles: Vec<(u32, usize)>,
}

impl RunReport {
    fn push(&mut self, id: u32, nb_tokens: usize) {
        self.articles.push((id, nb_tokens));
    }

    /// Get (identifier, number of tokens) pairs, in processing order.
    pub fn articles(&self) -> &[(u32, usize)] {
        self.articles.as_ref()
    }

    pub fn nb_articles(&self) -> usize {
        self.articles.len()
    }

    pub fn nb_tokens(&self) -> usize {
        self.articles.iter().map(|(_, nb)| nb).sum()
    }
}

pub struct AnnotationPipeline {
    src: PathBuf,
    dst: PathBuf,
    annotator: Annotator,
    source: Box<dyn SourceProvider>,
}

impl AnnotationPipeline {
    /// Annotate the dataset in `src`, writing views in `dst`.
    ///
    /// Raw text is read from `src` unless another source is set with [AnnotationPipeline::with_source].
    pub fn new(src: PathBuf, dst: PathBuf, annotator: Annotator) -> Self {
        let source = Box::new(FileSource::new(&src));
        Self {
            src,
            dst,
            annotator,
            source,
        }
    }

    pub fn with_source(mut self, source: Box<dyn SourceProvider>) -> Self {
        self.source = source;
        self
    }

    /// Get a reference to the pipeline's source folder.
    pub fn src(&self) -> &Path {
        &self.src
    }

    /// Get a reference to the pipeline's destination folder.
    pub fn dst(&self) -> &Path {
        &self.dst
    }

    /// Run the pipeline, returning per-article token counts.
    pub fn run_with_report(&self) -> Result<RunReport, Error> {
        validate(&self.src)?;
        // views in a subfolder would make the dataset inconsistent for the next run
        if self.dst != self.src && self.dst.starts_with(&self.src) {
            return Err(Error::Custom(format!(
                "destination {:?} is inside the dataset folder {:?}",
                self.dst, self.src
            )));
        }

        let mut registry = CorpusRegistry::from_path(&self.src)?;
        let writer = ViewWriter::new(&self.dst)?;
        let mut report = RunReport::default();

        info!(
            "annotating {} articles from {:?} (normalization: {})",
            registry.get_articles().len(),
            self.src,
            self.annotator.normalization()
        );

        for (id, article) in registry.get_articles_mut().iter_mut() {
            let id = *id;

            // metadata is informative only, a broken file does not stop the run
            match self.source.get_meta(id) {
                Ok(meta) => article.set_meta(meta),
                Err(e) => warn!("[{}] could not read metadata: {}", id, e),
            }
            if let Some(title) = article.meta().and_then(|meta| meta.title.as_deref()) {
                debug!("[{}] {}", id, title);
            }

            let raw_text = self.source.get_raw_text(id)?;
            let tokens = self.annotator.annotate(&raw_text)?;
            article.set_raw_text(raw_text);

            // views are built from this article's tokens only
            for view in View::ALL {
                let text = tokens.iter().map(|token| view.project(token)).join(" ");
                writer.save_as(id, view, &text)?;
                article.set_view(view, text);
            }
            article.release_text();

            info!("[{}] {} tokens annotated", id, tokens.len());
            report.push(id, tokens.len());
        }

        info!(
            "done: {} articles, {} tokens written to {:?}",
            report.nb_articles(),
            report.nb_tokens(),
            self.dst
        );
        Ok(report)
    }
}

impl Pipeline<()> for AnnotationPipeline {
    fn run(&self) -> Result<(), Error> {
        self.run_with_report().map(|_| ())
    }
}
