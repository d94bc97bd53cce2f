//! Annotated tokens and their serialized views.
use serde::{Deserialize, Serialize};

/// A token that went through both taggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAnnotation {
    original: String,
    lemma: String,
    lemma_tag: String,
    morph_tag: String,
}

impl TokenAnnotation {
    pub fn new(original: &str, lemma: &str, lemma_tag: &str, morph_tag: &str) -> Self {
        Self {
            original: original.to_string(),
            lemma: lemma.to_string(),
            lemma_tag: lemma_tag.to_string(),
            morph_tag: morph_tag.to_string(),
        }
    }

    /// Lowercased surface form.
    pub fn cleaned(&self) -> String {
        self.original.to_lowercase()
    }

    /// `lemma<lemma_tag>`
    pub fn single_tagged(&self) -> String {
        format!("{}<{}>", self.lemma, self.lemma_tag)
    }

    /// `lemma<lemma_tag>(morph_tag)`
    pub fn multiple_tagged(&self) -> String {
        format!("{}<{}>({})", self.lemma, self.lemma_tag, self.morph_tag)
    }

    /// Get a reference to the token's surface form.
    pub fn original(&self) -> &str {
        self.original.as_ref()
    }

    /// Get a reference to the token's lemma.
    pub fn lemma(&self) -> &str {
        self.lemma.as_ref()
    }

    /// Get a reference to the token's lemma tag.
    pub fn lemma_tag(&self) -> &str {
        self.lemma_tag.as_ref()
    }

    /// Get a reference to the token's morphological tag.
    pub fn morph_tag(&self) -> &str {
        self.morph_tag.as_ref()
    }
}

/// Serialized corpus views of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum View {
    Cleaned,
    SingleTagged,
    MultipleTagged,
}

impl View {
    pub const ALL: [View; 3] = [View::Cleaned, View::SingleTagged, View::MultipleTagged];

    /// File name suffix of the view.
    pub fn suffix(&self) -> &'static str {
        match self {
            View::Cleaned => "cleaned",
            View::SingleTagged => "single_tagged",
            View::MultipleTagged => "multiple_tagged",
        }
    }

    /// Project a token into the view.
    pub fn project(&self, token: &TokenAnnotation) -> String {
        match self {
            View::Cleaned => token.cleaned(),
            View::SingleTagged => token.single_tagged(),
            View::MultipleTagged => token.multiple_tagged(),
        }
    }
}
