use super::stopwords::StopWordSet;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Maximal runs of word characters (letters, digits, underscore), lowercased.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Tokenize then drop stop words. Source order and duplicates are kept.
pub fn tokenize_filtered(text: &str, stop_words: &StopWordSet) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !stop_words.contains(t))
        .collect()
}
