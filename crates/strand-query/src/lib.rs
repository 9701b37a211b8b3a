//! # strand-query
//!
//! Translates free-text queries such as "palindromes longer than 3
//! characters" into a [`FilterSet`](strand_core::FilterSet).
//!
//! This is a bounded pattern matcher, not a language model: a fixed, ordered
//! table of rules ([`RULE_ORDER`]) is run over the lower-cased query and each
//! rule that fires contributes to one accumulated filter set.
//!
//! ## Example
//!
//! ```
//! use strand_query::interpret;
//!
//! let interpreted = interpret("single word palindromes longer than 3").unwrap();
//! assert_eq!(interpreted.parsed_filters.word_count, Some(1));
//! assert_eq!(interpreted.parsed_filters.is_palindrome, Some(true));
//! assert_eq!(interpreted.parsed_filters.min_length, Some(4));
//! ```

pub mod interpreter;
pub mod rules;

pub use interpreter::{interpret, InterpretedQuery};
pub use rules::{Effect, Pattern, Rule, RULE_ORDER};
