
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::debug;

use crate::index::tokenizer::tokenize;
use crate::knowledge::store::Document;

/// A TF-IDF index over one generation of the document corpus.
///
/// The vocabulary is the set of all tokens across all documents in
/// first-seen order; every document vector has exactly `|vocabulary|`
/// dimensions, ordered identically. The index is immutable once built: any
/// source change produces a whole new generation rather than a partial
/// update.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TfIdfIndex {
    documents: Vec<Document>,
    vocabulary: Vec<String>,
    vectors: HashMap<String, Vec<f32>>,
}

impl TfIdfIndex {
    /// Build the vocabulary and one TF-IDF vector per document.
    ///
    /// Recomputes every document against the full vocabulary, an O(N·V)
    /// pass that is acceptable only because both stay in the hundreds.
    #[inline]
    pub fn build(documents: Vec<Document>) -> Self {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(&doc.content))
            .collect();

        let vocabulary: Vec<String> = tokenized.iter().flatten().unique().cloned().collect();

        // Document frequency per term, from per-document token sets.
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let total_docs = documents.len() as f32;
        let mut vectors = HashMap::with_capacity(documents.len());

        for (doc, tokens) in documents.iter().zip(&tokenized) {
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }
            let token_count = tokens.len() as f32;

            let vector: Vec<f32> = vocabulary
                .iter()
                .map(|term| {
                    let count = counts.get(term.as_str()).copied().unwrap_or(0);
                    if count == 0 || token_count == 0.0 {
                        return 0.0;
                    }
                    let tf = count as f32 / token_count;
                    let df = doc_freq.get(term.as_str()).copied().unwrap_or(0).max(1);
                    let idf = (total_docs / df as f32).ln();
                    tf * idf
                })
                .collect();

            vectors.insert(doc.id.clone(), vector);
        }

        debug!(
            "Built TF-IDF index: {} documents, {} vocabulary terms",
            documents.len(),
            vocabulary.len()
        );

        Self {
            documents,
            vocabulary,
            vectors,
        }
    }

    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[inline]
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    #[inline]
    pub fn vector(&self, doc_id: &str) -> Option<&[f32]> {
        self.vectors.get(doc_id).map(Vec::as_slice)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
