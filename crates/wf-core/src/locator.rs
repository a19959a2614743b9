use crate::constants::{HEIGHT_SCALE, HEIGHT_SPAN};

/// A single exact match of a term in the token stream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TermMatch {
    /// 0-based index into the token stream.
    pub index: usize,
    /// Unshifted column height derived from the index.
    pub height: f64,
}

/// Column height for a match at `index` in a stream of `token_count` tokens.
///
/// The fractional position `index / token_count` is scaled into
/// [0, HEIGHT_SPAN) and compressed by HEIGHT_SCALE, so later matches always
/// sit strictly above earlier ones. Callers must not pass `token_count` 0.
pub fn height_for_index(index: usize, token_count: usize) -> f64 {
    (HEIGHT_SPAN / token_count as f64) * index as f64 * HEIGHT_SCALE
}

/// Scan `tokens` in index order and report every token equal to `term`.
///
/// The comparison is exact string equality — normalization happens upstream
/// at the term-slot boundary. An empty token stream yields no matches, which
/// keeps the height formula's denominator nonzero.
pub fn locate(tokens: &[String], term: &str) -> Vec<TermMatch> {
    if tokens.is_empty() {
        return Vec::new();
    }
    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| token.as_str() == term)
        .map(|(i, _)| TermMatch {
            index: i,
            height: height_for_index(i, tokens.len()),
        })
        .collect()
}
