//! Word extraction for the booklet keyword index.
//!
//! Talk titles and abstracts are tokenized into "valid words": tokens that,
//! after shedding one layer of surrounding punctuation, consist purely of
//! letters (including German umlauts and sharp s) and hyphens. The extractor
//! keeps duplicates and original casing; sorting happens once at the end of a
//! wordlist run.

use std::sync::LazyLock;

use regex::Regex;

/// A word worth indexing: two or more letters or hyphens.
static VALID_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-A-Za-zÄÖÜäöüß]{2,}$").expect("valid word regex"));

/// Punctuation shed from the first and last character of a token.
const STRIP_CHARS: &[char] = &[
    '"', '\'', '.', ',', ';', ':', '[', ']', '(', ')', '-', '*',
];

/// Extracts the valid words from `text` in order of appearance.
pub fn extract_words(text: &str) -> Vec<String> {
    let cleaned = text.replace('\r', "").replace('\n', " ");

    let mut result = Vec::new();
    for token in cleaned.split(' ') {
        if token.chars().count() < 2 {
            continue;
        }
        let mut word = token;
        if let Some(first) = word.chars().next() {
            if STRIP_CHARS.contains(&first) {
                word = &word[first.len_utf8()..];
            }
        }
        if let Some(last) = word.chars().last() {
            if STRIP_CHARS.contains(&last) {
                word = &word[..word.len() - last.len_utf8()];
            }
        }
        if VALID_WORD.is_match(word) {
            result.push(word.to_string());
        }
    }
    result
}
