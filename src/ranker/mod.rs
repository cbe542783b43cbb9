// TF-IDF similarity ranking over the recipe corpus

pub mod document;
pub mod index;
pub mod math;
pub mod tokenizer;

// Re-exports
pub use document::{reference_corpus, QueryResult, RecipeDocument};
pub use index::Index;
pub use tokenizer::Tokenizer;

use crate::error::Result;

/// Number of recommendations shown per query unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Build the immutable index for `corpus`. Called once at startup.
pub fn build_index(corpus: Vec<RecipeDocument>) -> Result<Index> {
    Index::build(corpus)
}
