//! Free-text similarity for listing descriptions.
//!
//! Descriptions are reduced to term-frequency vectors and compared with
//! cosine similarity:
//!
//! | Step | Rule |
//! |------|------|
//! | Normalize | lowercase, runs of non-alphanumeric characters become one space |
//! | Split | whitespace |
//! | Filter | drop tokens of one character and [`STOP_WORDS`] |
//! | Score | `dot(a, b) / (‖a‖ · ‖b‖)`, `0` if either side is empty |
//!
//! # Quick start
//!
//! ```
//! use carval_text::cosine_similarity;
//!
//! let s = cosine_similarity("One owner, full service history", "Full service history");
//! assert!(s > 0.5 && s <= 1.0);
//! assert_eq!(cosine_similarity("the car", "a vehicle"), 0.0);
//! ```
//!
//! When one side is compared against many texts, build its [`TermVector`]
//! once and call [`TermVector::cosine`] in the loop.

pub mod stop_words;
pub mod tokenize;
pub mod vector;

pub use stop_words::{STOP_WORDS, is_stop_word};
pub use tokenize::tokenize;
pub use vector::TermVector;

/// Cosine similarity between the term-frequency vectors of two texts.
///
/// Always in `[0, 1]`. Returns exactly `0.0` when either text has no usable
/// tokens and exactly `1.0` for two identical non-empty texts.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    TermVector::from_text(a).cosine(&TermVector::from_text(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_is_one() {
        let text = "Leather seats, sunroof, new tyres";
        assert_eq!(cosine_similarity(text, text), 1.0);
    }

    #[test]
    fn test_empty_side_is_zero() {
        assert_eq!(cosine_similarity("", "sunroof"), 0.0);
        assert_eq!(cosine_similarity("sunroof", ""), 0.0);
        assert_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn test_stop_words_only_is_zero() {
        assert_eq!(cosine_similarity("the car is a vehicle", "sunroof"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = "clean interior, garage kept, low mileage";
        let b = "low mileage highway driven";
        assert_eq!(cosine_similarity(a, b), cosine_similarity(b, a));
    }
}
