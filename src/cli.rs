//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use morphcorpus::transformers::Normalization;

#[derive(Debug, StructOpt)]
#[structopt(name = "morphcorpus", about = "corpus annotation tool.")]
/// Holds every command that is callable by the `morphcorpus` command.
pub enum Morphcorpus {
    #[structopt(about = "Check dataset consistency")]
    Validate(Validate),
    #[structopt(about = "Run annotation pipeline")]
    Annotate(Annotate),
}

#[derive(Debug, StructOpt)]
/// Validate command and parameters.
pub struct Validate {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub src: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Annotate command and parameters.
///
/// ```sh
/// morphcorpus-annotate 0.1.0
/// Run annotation pipeline
///
/// USAGE:
///     morphcorpus annotate [OPTIONS] <src>
///
/// OPTIONS:
///         --dst <dst>                      views destination, not inside the dataset. Defaults to the dataset location.
///         --lemma-dict <lemma-dict>        JSON lemma dictionary, used instead of mystem
///         --morph-dict <morph-dict>        JSON morphology dictionary
///         --morph-url <morph-url>          morphology service endpoint
///         --mystem <mystem>                path to mystem [default: mystem]
///         --normalization <normalization>  strip-newlines or letters-only [default: strip-newlines]
///
/// ARGS:
///     <src>    dataset location
/// ```
pub struct Annotate {
    #[structopt(parse(from_os_str), help = "dataset location")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "views destination, not inside the dataset. Defaults to the dataset location."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(
        long = "normalization",
        help = "strip-newlines or letters-only",
        default_value = "strip-newlines"
    )]
    pub normalization: Normalization,
    #[structopt(
        parse(from_os_str),
        long = "mystem",
        help = "path to mystem",
        default_value = "mystem"
    )]
    pub mystem: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "lemma-dict",
        help = "JSON lemma dictionary, used instead of mystem"
    )]
    pub lemma_dict: Option<PathBuf>,
    #[structopt(long = "morph-url", help = "morphology service endpoint")]
    pub morph_url: Option<String>,
    #[structopt(
        parse(from_os_str),
        long = "morph-dict",
        help = "JSON morphology dictionary"
    )]
    pub morph_dict: Option<PathBuf>,
}
