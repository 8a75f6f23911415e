
use tracing::debug;

use crate::index::tfidf::TfIdfIndex;
use crate::index::tokenizer::tokenize;
use crate::knowledge::store::Document;

/// Fixed relevance floor; results scoring at or below this are dropped.
pub const SCORE_FLOOR: f32 = 0.1;
/// Fixed score assigned when a query is too short to rank meaningfully.
pub const SHORT_QUERY_SCORE: f32 = 0.5;

/// A ranked document with its cosine-similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub document: Document,
    pub score: f32,
}

/// Rank documents against a query, descending by score, at most `limit`.
///
/// Queries with fewer than two tokens skip scoring entirely: TF-IDF is
/// meaningless at that length, so the first `limit` documents are returned
/// in corpus order with a fixed score instead.
#[inline]
pub fn search(index: &TfIdfIndex, query: &str, limit: usize) -> Vec<SearchResult> {
    let query_tokens = tokenize(query);

    if query_tokens.len() < 2 {
        return index
            .documents()
            .iter()
            .take(limit)
            .map(|document| SearchResult {
                document: document.clone(),
                score: SHORT_QUERY_SCORE,
            })
            .collect();
    }

    // Query vector over the existing vocabulary, raw term frequency only.
    // No idf weighting on the query side; the document side carries it.
    let query_vector: Vec<f32> = index
        .vocabulary()
        .iter()
        .map(|term| query_tokens.iter().filter(|t| *t == term).count() as f32)
        .collect();

    let mut results: Vec<SearchResult> = index
        .documents()
        .iter()
        .filter_map(|document| {
            let vector = index.vector(&document.id)?;
            let score = cosine_similarity(&query_vector, vector);
            (score > SCORE_FLOOR).then(|| SearchResult {
                document: document.clone(),
                score,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);

    debug!(
        "Ranked query '{}': {} results above floor",
        query,
        results.len()
    );
    results
}

/// Cosine of the angle between two vectors; 0 when either norm is zero.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
