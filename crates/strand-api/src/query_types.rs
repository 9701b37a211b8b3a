//! Custom query parameter types with improved error handling
//!
//! This module provides wrapper types for query parameters that give
//! user-friendly error messages instead of cryptic deserialization failures.

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::ops::Deref;

use strand_core::FilterSet;

/// A boolean that accepts the spellings people actually type in URLs.
///
/// Accepts (case-insensitive): `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleBool(pub bool);

impl FlexibleBool {
    /// Returns the inner bool
    pub fn into_inner(self) -> bool {
        self.0
    }
}

impl Deref for FlexibleBool {
    type Target = bool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for FlexibleBool {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_flexible_bool(&s).map_err(de::Error::custom)
    }
}

fn parse_flexible_bool(s: &str) -> Result<FlexibleBool, String> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(FlexibleBool(true)),
        "false" | "0" | "no" | "off" => Ok(FlexibleBool(false)),
        "" => Err("Boolean value cannot be empty. Expected 'true' or 'false'".to_string()),
        other => Err(format!(
            "Invalid boolean '{}'. Expected one of: true, false, 1, 0, yes, no, on, off",
            other
        )),
    }
}

/// A query parameter that must hold exactly one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleChar(pub char);

impl SingleChar {
    /// Returns the inner char
    pub fn into_inner(self) -> char {
        self.0
    }
}

impl fmt::Display for SingleChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for SingleChar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_single_char(&s).map_err(de::Error::custom)
    }
}

fn parse_single_char(s: &str) -> Result<SingleChar, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(SingleChar(c)),
        (None, _) => Err("Character value cannot be empty".to_string()),
        (Some(_), Some(_)) => Err(format!(
            "Invalid character '{}'. Expected exactly one character",
            s
        )),
    }
}

/// Query parameters for `GET /strings`.
#[derive(Debug, Default, Deserialize)]
pub struct ListStringsQuery {
    pub is_palindrome: Option<FlexibleBool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    pub contains_character: Option<SingleChar>,
}

impl ListStringsQuery {
    /// Convert the parsed parameters into a filter set.
    pub fn into_filters(self) -> FilterSet {
        FilterSet {
            is_palindrome: self.is_palindrome.map(FlexibleBool::into_inner),
            word_count: self.word_count,
            min_length: self.min_length,
            max_length: self.max_length,
            contains_character: self.contains_character.map(SingleChar::into_inner),
        }
    }
}

/// Query parameters for `GET /strings/filter-by-natural-language`.
#[derive(Debug, Default, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: Option<String>,
}
