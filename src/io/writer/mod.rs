/*!
# Corpus view writing

Each annotated article is saved as three text files, one per [crate::transformers::View]:
`{id}_cleaned.txt`, `{id}_single_tagged.txt` and `{id}_multiple_tagged.txt`.
!*/
mod viewwriter;
pub use viewwriter::ViewWriter;
