//! Structured record filtering

use crate::strings::types::StringRecord;
use serde::{Deserialize, Serialize};

/// Optional-field predicate set applied conjunctively to stored records
///
/// Constructed per request, never persisted. Unset fields are omitted from
/// serialization so echo payloads list exactly the populated predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Case-sensitive single-character containment over the raw value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// Select the records matching every populated predicate
    ///
    /// Stable: the result is a subsequence of the input in its original
    /// order. An empty spec returns the input unchanged.
    pub fn apply(&self, records: &[StringRecord]) -> Vec<StringRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    fn matches(&self, record: &StringRecord) -> bool {
        if let Some(want) = self.is_palindrome {
            if record.properties.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if record.properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if record.properties.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if record.properties.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            if !record.value.contains(ch) {
                return false;
            }
        }
        true
    }

    /// Whether no predicate is populated
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}
