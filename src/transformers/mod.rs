/*! Text transformers.

Normalizes raw text and annotates it into [TokenAnnotation]s.

!*/

mod annotate;
mod normalize;
mod token;
mod transform;

pub use annotate::{Annotate, Annotator};
pub use normalize::Normalization;
pub use token::{TokenAnnotation, View};
pub use transform::Transform;
