//! Description normalization and tokenization.

use crate::stop_words::is_stop_word;

/// Splits `text` into comparable tokens.
///
/// The text is lowercased and every run of non-alphanumeric characters acts
/// as a single separator. Tokens of a single character and stop words are
/// dropped. Alphanumeric is Unicode-aware, so non-Latin descriptions keep
/// their words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().nth(1).is_some())
        .filter(|t| !is_stop_word(t))
        .map(str::to_owned)
        .collect()
}
