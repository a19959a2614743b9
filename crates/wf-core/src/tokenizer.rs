use regex::Regex;
use std::sync::LazyLock;

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w']+").unwrap());

/// Tokenize source text into lowercase words.
///
/// Literal periods are stripped outright (so "U.S." becomes "us"), the text
/// is folded to lowercase, and the result is split on every maximal run of
/// characters that are neither word characters nor apostrophes. Delimiter
/// runs collapse; runs at the start or end of the text produce no empty
/// tokens. Token order matches first-occurrence order in the source.
pub fn tokenize(text: &str) -> Vec<String> {
    let stripped = text.replace('.', "");
    let folded = stripped.to_lowercase();
    DELIMITERS
        .split(&folded)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
