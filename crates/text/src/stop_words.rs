//! Words carrying no signal when comparing listing descriptions.

/// Filler words ignored by [`tokenize`](crate::tokenize).
///
/// Common English function words plus the domain words `car` and `vehicle`,
/// which appear in nearly every listing.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "for", "with", "without", "from", "into", "onto", "of", "to", "in",
    "on", "at", "by", "as", "is", "are", "was", "were", "be", "been", "being", "it", "its", "this",
    "that", "these", "those", "there", "here", "has", "have", "had", "do", "does", "did", "not",
    "no", "so", "if", "then", "than", "too", "very", "can", "will", "just", "all", "any", "some",
    "my", "our", "your", "we", "you", "he", "she", "they", "an", "car", "vehicle",
];

/// Returns `true` if `token` (already lowercased) is a stop word.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
