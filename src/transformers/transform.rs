//! Transform trait.

/// Text to text transformation.
pub trait Transform {
    fn transform(&self, text: &str) -> String;
}
