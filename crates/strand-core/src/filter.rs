//! Structured filter model for stored strings.
//!
//! A [`FilterSet`] is the single representation of query constraints. Both the
//! structured `GET /strings` parameters and the natural-language interpreter
//! produce one, and [`apply`] evaluates it the same way for either source.
//!
//! Each field is an independent dimension. An absent field places no
//! constraint; a record matches when it satisfies every present field.
//!
//! # Example
//!
//! ```
//! use strand_core::{apply, FilterSet, StringRecord};
//!
//! let records = vec![
//!     StringRecord::new("level"),
//!     StringRecord::new("hello world"),
//! ];
//!
//! let filters = FilterSet::new().with_palindrome(true).with_max_length(5);
//! let matched = apply(records, &filters);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].value, "level");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::StringRecord;

// =============================================================================
// FILTER SET
// =============================================================================

/// Partially-specified set of match constraints.
///
/// Integer bounds are signed: `shorter than 0` resolves to `max_length = -1`,
/// which no record satisfies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FilterSet {
    /// Required palindrome flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Exact word count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,

    /// Inclusive lower bound on length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,

    /// Inclusive upper bound on length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,

    /// Character that must occur in the original value, ignoring case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// Create a new empty filter (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // BUILDER METHODS
    // =========================================================================

    /// Require the given palindrome flag.
    pub fn with_palindrome(mut self, is_palindrome: bool) -> Self {
        self.is_palindrome = Some(is_palindrome);
        self
    }

    /// Require an exact word count.
    pub fn with_word_count(mut self, word_count: i64) -> Self {
        self.word_count = Some(word_count);
        self
    }

    /// Require `length >= min_length`.
    pub fn with_min_length(mut self, min_length: i64) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Require `length <= max_length`.
    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Require the character to occur in the original value.
    pub fn with_character(mut self, c: char) -> Self {
        self.contains_character = Some(c);
        self
    }

    // =========================================================================
    // CONSTRAINT CHECKS
    // =========================================================================

    /// Check if the filter has no constraints.
    pub fn is_empty(&self) -> bool {
        self.active_constraint_count() == 0
    }

    /// Number of present constraints.
    pub fn active_constraint_count(&self) -> usize {
        [
            self.is_palindrome.is_some(),
            self.word_count.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.contains_character.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Check a single record against every present constraint.
    pub fn matches(&self, record: &StringRecord) -> bool {
        let props = &record.properties;
        let length = props.length as i64;

        if let Some(flag) = self.is_palindrome {
            if props.is_palindrome != flag {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if props.word_count as i64 != count {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if length > max {
                return false;
            }
        }
        if let Some(c) = self.contains_character {
            // Tested against the raw value, not the trimmed one
            if !contains_ignore_case(&record.value, c) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, c: char) -> bool {
    let needle: String = c.to_lowercase().collect();
    haystack.to_lowercase().contains(&needle)
}

// =============================================================================
// EVALUATION
// =============================================================================

/// Check `record` against `filters`.
pub fn matches(record: &StringRecord, filters: &FilterSet) -> bool {
    filters.matches(record)
}

/// Keep the records that match `filters`, preserving their relative order.
pub fn apply<I>(records: I, filters: &FilterSet) -> Vec<StringRecord>
where
    I: IntoIterator<Item = StringRecord>,
{
    records
        .into_iter()
        .filter(|record| filters.matches(record))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
