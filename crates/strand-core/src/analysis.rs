//! String analyzer.
//!
//! Every property is computed from the trimmed value. [`content_hash`] is the
//! only place identity is derived, so path lookups and record creation always
//! agree on the key.

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

use crate::models::AnalysisProperties;

/// Hex SHA-256 digest of the trimmed value's UTF-8 bytes.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.trim().as_bytes()))
}

/// Compute the derived properties of `value`.
///
/// Pure and infallible; the empty string yields zeroed counts and is a
/// palindrome.
pub fn analyze(value: &str) -> AnalysisProperties {
    let clean = value.trim();

    let mut character_frequency_map = BTreeMap::new();
    for c in clean.chars() {
        *character_frequency_map.entry(c).or_insert(0) += 1;
    }

    AnalysisProperties {
        length: clean.chars().count(),
        is_palindrome: is_palindrome(clean),
        uniq: character_frequency_map.len(),
        word_count: clean.split_whitespace().count(),
        sha256_hash: content_hash(clean),
        character_frequency_map,
    }
}

fn is_palindrome(clean: &str) -> bool {
    // Reverse before lower-casing; some characters lower-case to several
    let reversed: String = clean.chars().rev().collect();
    clean.to_lowercase() == reversed.to_lowercase()
}
