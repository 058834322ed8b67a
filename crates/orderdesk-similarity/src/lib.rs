//! Orderdesk Similarity — token-set text similarity.
//!
//! A standalone utility with no ties to the order domain: two texts are
//! tokenized and compared by the Jaccard similarity of their token sets.

use std::collections::HashSet;

/// Splits `text` into lowercase alphanumeric tokens.
///
/// The text is lowercased and split on whitespace; every character outside
/// `[a-z0-9]` is stripped from each word, and words that end up empty are
/// dropped. Duplicates and ordering are preserved.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Jaccard similarity of the token sets of `text1` and `text2`.
///
/// Returns the intersection size over the union size of the two token
/// sets, or `0.0` when either token set is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn similarity(text1: &str, text2: &str) -> f64 {
    let set1: HashSet<String> = tokenize(text1).into_iter().collect();
    let set2: HashSet<String> = tokenize(text2).into_iter().collect();

    if set1.is_empty() || set2.is_empty() {
        return 0.0;
    }

    let intersection = set1.intersection(&set2).count();
    let union = set1.union(&set2).count();

    intersection as f64 / union as f64
}
