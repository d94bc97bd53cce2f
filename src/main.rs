//! # morphcorpus
//!
//! ```sh
//! morphcorpus 0.1.0
//! corpus annotation tool.
//!
//! USAGE:
//!     morphcorpus <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     annotate    Run annotation pipeline
//!     help        Prints this message or the help of the given subcommand(s)
//!     validate    Check dataset consistency
//! ```
//!
use structopt::StructOpt;

use morphcorpus::error::Error;
use morphcorpus::pipelines::{AnnotationPipeline, Pipeline};
use morphcorpus::processing::validate_dataset;
use morphcorpus::taggers::{
    HttpMorphology, LemmaTagger, LookupLemmatizer, LookupMorphology, MorphTagger, Mystem,
};
use morphcorpus::transformers::Annotator;

#[macro_use]
extern crate log;

mod cli;

/// Build taggers from command line options.
fn taggers(a: &cli::Annotate) -> Result<(Box<dyn LemmaTagger>, Box<dyn MorphTagger>), Error> {
    let lemmatizer: Box<dyn LemmaTagger> = match &a.lemma_dict {
        Some(path) => Box::new(LookupLemmatizer::from_path(path)?),
        None => Box::new(Mystem::new(&a.mystem)),
    };

    let morphology: Box<dyn MorphTagger> = match (&a.morph_dict, &a.morph_url) {
        (Some(path), _) => Box::new(LookupMorphology::from_path(path)?),
        (None, Some(url)) => Box::new(HttpMorphology::new(url)?),
        (None, None) => {
            return Err(Error::Custom(
                "no morphology tagger: use --morph-url or --morph-dict".to_string(),
            ))
        }
    };

    Ok((lemmatizer, morphology))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Morphcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Morphcorpus::Validate(v) => {
            let dataset = validate_dataset(&v.src)?;
            println!("{:?}: {} articles", dataset.root(), dataset.len());
        }

        cli::Morphcorpus::Annotate(a) => {
            let (lemmatizer, morphology) = taggers(&a)?;
            let annotator =
                Annotator::new(lemmatizer, morphology).with_normalization(a.normalization);

            let dst = a.dst.clone().unwrap_or_else(|| a.src.clone());
            let p = AnnotationPipeline::new(a.src, dst, annotator);
            if let Err(e) = p.run() {
                error!("annotation failed: {}", e);
                return Err(e);
            }
        }
    };
    Ok(())
}
