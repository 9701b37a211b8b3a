//! Stored record types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::analysis::analyze;

/// Properties derived from the trimmed value of a submitted string.
///
/// Computed once when the record is created and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisProperties {
    /// Character count of the trimmed value.
    pub length: usize,
    /// Whether the trimmed value reads the same reversed, ignoring case.
    pub is_palindrome: bool,
    /// Number of distinct characters.
    pub uniq: usize,
    /// Number of whitespace-separated tokens.
    pub word_count: usize,
    /// Hex SHA-256 digest of the trimmed value.
    pub sha256_hash: String,
    /// Occurrence count per character.
    #[schema(value_type = Object)]
    pub character_frequency_map: BTreeMap<char, usize>,
}

/// A stored string and its analysis snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StringRecord {
    /// Content hash of the trimmed value; identity and idempotency key.
    pub id: String,
    /// The string exactly as submitted, untrimmed.
    pub value: String,
    pub properties: AnalysisProperties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze `value` and build a new record stamped with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        Self {
            id: properties.sha256_hash.clone(),
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}

/// Request body for `POST /strings`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStringRequest {
    pub value: String,
}
