use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::{debug, info};

use super::document::{QueryResult, RecipeDocument};
use super::math::{dot_product, l2_normalize, round_to, smoothed_idf, EPSILON};
use super::tokenizer::Tokenizer;
use crate::error::{Error, Result};

/// Decimal places kept on reported scores.
const SCORE_DECIMALS: i32 = 3;

/// Immutable TF-IDF index over a fixed recipe corpus.
///
/// Built once with [`Index::build`]; every query afterwards is a pure read, so a
/// single index can be shared behind an `Arc` by any number of request handlers.
#[derive(Debug, Clone)]
pub struct Index {
    tokenizer: Tokenizer,
    documents: Vec<RecipeDocument>,
    /// term -> dimension, in lexicographic term order
    vocabulary: BTreeMap<String, usize>,
    /// idf weight per dimension
    idf: Vec<f64>,
    /// unit-length tf-idf row per document, aligned with `documents`
    matrix: Vec<Vec<f64>>,
}

impl Index {
    /// Tokenize every document, freeze the vocabulary and compute the document matrix.
    ///
    /// An empty corpus is a configuration error: there is nothing to rank against.
    pub fn build(documents: Vec<RecipeDocument>) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::Config(
                "Cannot build an index from an empty corpus".to_string(),
            ));
        }

        let tokenizer = Tokenizer::new();

        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(&tokenizer, doc.combined_text()))
            .collect();

        let terms: BTreeSet<&str> = term_counts
            .iter()
            .flat_map(|counts| counts.keys().map(String::as_str))
            .collect();
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (term.to_string(), dim))
            .collect();

        let mut doc_freq = vec![0usize; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                doc_freq[vocabulary[term]] += 1;
            }
        }

        let n_docs = documents.len();
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|&df| smoothed_idf(n_docs, df))
            .collect();

        let matrix: Vec<Vec<f64>> = term_counts
            .iter()
            .map(|counts| {
                let mut row = vec![0.0; vocabulary.len()];
                for (term, &count) in counts {
                    let dim = vocabulary[term];
                    row[dim] = count as f64 * idf[dim];
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        info!(
            "Index built: {} recipes, {} terms",
            n_docs,
            vocabulary.len()
        );

        Ok(Self {
            tokenizer,
            documents,
            vocabulary,
            idf,
            matrix,
        })
    }

    /// Project `text` into the frozen term space as a unit-length tf-idf vector.
    ///
    /// Terms outside the vocabulary are dropped; text with no known terms maps
    /// to the zero vector.
    pub fn vectorize(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in self.tokenizer.tokenize(text) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                vector[dim] += self.idf[dim];
            }
        }
        l2_normalize(&mut vector);
        vector
    }

    /// Unrounded cosine similarity of `query` against every document, in corpus order.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query_vector = self.vectorize(query);
        if query_vector.iter().all(|w| w.abs() < EPSILON) {
            return vec![0.0; self.documents.len()];
        }

        self.matrix
            .iter()
            .map(|row| dot_product(&query_vector, row))
            .collect()
    }

    /// Return the `top_k` most similar recipes, best first.
    ///
    /// Equal scores keep corpus order. Never fails: unknown or empty queries
    /// yield zero-scored results.
    pub fn recommend(&self, query: &str, top_k: usize) -> Vec<QueryResult> {
        let scores = self.similarities(query);

        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        // sort_by is stable, ties stay in corpus order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let results: Vec<QueryResult> = ranked
            .into_iter()
            .take(top_k.min(self.documents.len()))
            .map(|(idx, score)| {
                let doc = &self.documents[idx];
                QueryResult {
                    title: doc.title.clone(),
                    ingredients: doc.ingredients.clone(),
                    score: round_to(score, SCORE_DECIMALS).clamp(0.0, 1.0),
                }
            })
            .collect();

        debug!(
            "Query {:?} -> {} results (top score {:?})",
            query,
            results.len(),
            results.first().map(|r| r.score)
        );

        results
    }

    pub fn documents(&self) -> &[RecipeDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn dimension_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

fn count_terms(tokenizer: &Tokenizer, text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenizer.tokenize(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
