//! Derived string properties and the analyzer that computes them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// Properties derived from a string value
///
/// Computed once at record creation and never recomputed; two equal values
/// always produce identical properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Length in UTF-16 code units, which is what web clients report for
    /// the same string
    pub length: usize,

    /// Whether the lowercased value equals its own character reverse.
    /// Whitespace and punctuation are not stripped.
    pub is_palindrome: bool,

    /// Number of distinct characters, case-sensitive
    pub unique_characters: usize,

    /// Number of whitespace-delimited tokens after trimming; an empty or
    /// all-whitespace value counts as one token
    pub word_count: usize,

    /// Lowercase hex SHA-256 digest of the value; identical to the record id
    pub sha256_hash: String,

    /// Occurrence count per character, in first-seen order
    pub character_frequency_map: IndexMap<char, u64>,
}

/// Lowercase hex SHA-256 digest of a string's raw bytes
pub fn sha256_hex(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Analyze a string and return its derived properties
pub fn analyze(value: &str) -> StringProperties {
    let lowered = value.to_lowercase();
    let is_palindrome = lowered.chars().eq(lowered.chars().rev());

    let unique_characters = value.chars().collect::<HashSet<char>>().len();

    // Splitting an empty token sequence still counts as one word
    let word_count = value.split_whitespace().count().max(1);

    let mut character_frequency_map = IndexMap::new();
    for ch in value.chars() {
        *character_frequency_map.entry(ch).or_insert(0) += 1;
    }

    StringProperties {
        length: value.encode_utf16().count(),
        is_palindrome,
        unique_characters,
        word_count,
        sha256_hash: sha256_hex(value),
        character_frequency_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_racecar() {
        let props = analyze("racecar");
        assert!(props.is_palindrome);
        assert_eq!(props.length, 7);
        assert_eq!(props.word_count, 1);
    }

    #[test]
    fn test_hello_world() {
        let props = analyze("Hello World");
        assert_eq!(props.length, 11);
        assert_eq!(props.word_count, 2);
        assert!(!props.is_palindrome);
    }

    #[test]
    fn test_unique_characters() {
        assert_eq!(analyze("aabbcc").unique_characters, 3);
    }

    #[test]
    fn test_unique_characters_case_sensitive() {
        assert_eq!(analyze("Aa").unique_characters, 2);
    }

    #[test]
    fn test_palindrome_case_insensitive() {
        assert!(analyze("RaceCar").is_palindrome);
    }

    #[test]
    fn test_palindrome_keeps_whitespace() {
        // Reads as a palindrome only if the space is ignored, which it is not
        assert!(!analyze("nurses run").is_palindrome);
    }

    #[test]
    fn test_empty_string() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_characters, 0);
        assert_eq!(props.word_count, 1);
        assert!(props.character_frequency_map.is_empty());
    }

    #[test]
    fn test_whitespace_only_word_count() {
        assert_eq!(analyze("   ").word_count, 1);
    }

    #[test]
    fn test_sha256_known_digest() {
        // Independently computed: echo -n abc | sha256sum
        assert_eq!(
            analyze("abc").sha256_hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_deterministic() {
        assert_eq!(analyze("determinism").sha256_hash, analyze("determinism").sha256_hash);
    }

    #[test]
    fn test_frequency_map_counts_and_order() {
        let props = analyze("hello");
        let entries: Vec<(char, u64)> = props
            .character_frequency_map
            .iter()
            .map(|(c, n)| (*c, *n))
            .collect();
        assert_eq!(entries, vec![('h', 1), ('e', 1), ('l', 2), ('o', 1)]);
    }

    #[test]
    fn test_frequency_map_counts_whitespace() {
        let props = analyze("a a");
        assert_eq!(props.character_frequency_map[&' '], 1);
        assert_eq!(props.character_frequency_map[&'a'], 2);
    }

    #[test]
    fn test_astral_plane_length() {
        // One crab, two UTF-16 code units, one distinct character
        let props = analyze("🦀");
        assert_eq!(props.length, 2);
        assert_eq!(props.unique_characters, 1);
        assert_eq!(props.character_frequency_map[&'🦀'], 1);
    }

    #[test]
    fn test_equal_values_equal_properties() {
        assert_eq!(analyze("same input"), analyze("same input"));
    }
}
