//! Pipelines.
//!
//! The annotation pipeline is implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
mod annotation;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use annotation::{AnnotationPipeline, RunReport};
pub use pipeline::Pipeline;
