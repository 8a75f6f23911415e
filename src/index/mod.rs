// Index module
// Tokenization, TF-IDF vectorization, and cosine-similarity ranking

pub mod search;
pub mod tfidf;
pub mod tokenizer;

pub use search::{SHORT_QUERY_SCORE, SCORE_FLOOR, SearchResult, search};
pub use tfidf::TfIdfIndex;
pub use tokenizer::tokenize;
