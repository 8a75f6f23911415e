
/// Minimum token length kept by the tokenizer; shorter tokens carry almost
/// no ranking signal in this corpus.
const MIN_TOKEN_LEN: usize = 3;

/// Normalize raw text into index terms.
///
/// Lower-cases the input, splits on every character that is not alphanumeric
/// or an underscore, and drops tokens shorter than three characters. No
/// stemming, no stopword list; deterministic and pure.
///
/// "Alphanumeric" is Unicode-aware, so accented words like "café" survive as
/// one token instead of splitting at the accent. Queries and documents go
/// through the same function, so both sides agree on the token set.
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_string)
        .collect()
}
