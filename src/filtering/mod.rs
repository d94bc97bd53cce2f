/*! Filtering utilities

Filters decide whether a token goes through annotation, based on what the taggers returned.

Filters implement [filter::Filter]: they hold no state, so two equal inputs always get the same answer.
! */
mod filter;
mod token;

pub use filter::Filter;
pub use token::{HasAnalysis, HasParse, HasSurface, LemmaFilter};
