/*! Dataset processing

Checks run on a dataset folder before anything gets annotated.
!*/
mod validate;

pub use validate::{validate, validate_dataset, ArticleFiles, DatasetDirectory};
