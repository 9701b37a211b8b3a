//! The interpreter's rule table.
//!
//! Rules run in the order of [`RULE_ORDER`]. Several rules may fire for one
//! query and they all write into the same filter set, so the order decides
//! which rule wins when two of them set the same field:
//!
//! | # | Rule           | Fires on                                  | Effect                        |
//! |---|----------------|-------------------------------------------|-------------------------------|
//! | 1 | `palindrome`   | "palindromic", "palindrome"               | `is_palindrome = true`        |
//! | 2 | `single_word`  | "single word", "one word"                 | `word_count = 1`              |
//! | 3 | `two_words`    | "two word"                                | `word_count = 2`              |
//! | 4 | `three_words`  | "three word"                              | `word_count = 3`              |
//! | 5 | `longer_than`  | `longer than N`                           | `min_length = N + 1`          |
//! | 6 | `shorter_than` | `shorter than N`                          | `max_length = N - 1`          |
//! | 7 | `at_least`     | `at least N character(s)`                 | `min_length = N`              |
//! | 8 | `at_most`      | `at most N character(s)`                  | `max_length = N`              |
//! | 9 | `letter`       | `letter X`                                | `contains_character = X`      |
//! |10 | `containing`   | `containing [the] [letter] X`, also `contain`/`contains` and `character` | `contains_character = X` |
//! |11 | `first_vowel`  | "first vowel"                             | `contains_character = 'a'`    |
//! |12 | `vowel_a`      | `vowel a` as whole words                  | `contains_character = 'a'`    |
//!
//! Rules 2-4 share the `word_count` group: only the first of them to fire
//! applies. Rules 5-8 use the first number that parses for their phrase;
//! rules 9-10 apply every letter they capture.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// How a rule recognizes its phrase in the lower-cased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Fires when any of the phrases occurs as a substring.
    Phrase(&'static [&'static str]),
    /// Fires on every match of the expression. Capture group 1, when present,
    /// feeds the effect.
    Regex(&'static str),
}

/// What a firing rule writes into the filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// `is_palindrome = true`
    Palindrome,
    /// `word_count = n`
    WordCount(i64),
    /// `min_length = N + 1` (strict lower bound)
    LongerThan,
    /// `max_length = N - 1` (strict upper bound)
    ShorterThan,
    /// `min_length = N`
    AtLeast,
    /// `max_length = N`
    AtMost,
    /// `contains_character = X` from the captured letter
    CapturedCharacter,
    /// `contains_character = c`, overriding any captured letter
    Character(char),
}

impl Effect {
    /// Numeric effects take the first usable number in the query; later
    /// repeats of the same phrase are ignored.
    pub fn first_hit_only(self) -> bool {
        matches!(
            self,
            Effect::LongerThan | Effect::ShorterThan | Effect::AtLeast | Effect::AtMost
        )
    }
}

/// A single pattern-to-effect mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: Pattern,
    pub effect: Effect,
    /// Rules sharing a group are mutually exclusive; the first to fire wins.
    pub group: Option<&'static str>,
}

const fn rule(name: &'static str, pattern: Pattern, effect: Effect) -> Rule {
    Rule {
        name,
        pattern,
        effect,
        group: None,
    }
}

const fn word_count_rule(name: &'static str, phrases: &'static [&'static str], n: i64) -> Rule {
    Rule {
        name,
        pattern: Pattern::Phrase(phrases),
        effect: Effect::WordCount(n),
        group: Some("word_count"),
    }
}

/// The fixed evaluation order of the interpreter.
pub const RULE_ORDER: &[Rule] = &[
    rule(
        "palindrome",
        Pattern::Phrase(&["palindromic", "palindrome"]),
        Effect::Palindrome,
    ),
    word_count_rule("single_word", &["single word", "one word"], 1),
    word_count_rule("two_words", &["two word"], 2),
    word_count_rule("three_words", &["three word"], 3),
    rule(
        "longer_than",
        Pattern::Regex(r"longer than ([0-9]+)"),
        Effect::LongerThan,
    ),
    rule(
        "shorter_than",
        Pattern::Regex(r"shorter than ([0-9]+)"),
        Effect::ShorterThan,
    ),
    rule(
        "at_least",
        Pattern::Regex(r"at least ([0-9]+) characters?"),
        Effect::AtLeast,
    ),
    rule(
        "at_most",
        Pattern::Regex(r"at most ([0-9]+) characters?"),
        Effect::AtMost,
    ),
    rule(
        "letter",
        Pattern::Regex(r"letter\s+([a-z])"),
        Effect::CapturedCharacter,
    ),
    rule(
        "containing",
        Pattern::Regex(r"contain(?:ing|s)?\s+(?:the\s+)?(?:letter\s+|character\s+)?([a-z])"),
        Effect::CapturedCharacter,
    ),
    rule(
        "first_vowel",
        Pattern::Phrase(&["first vowel"]),
        Effect::Character('a'),
    ),
    rule(
        "vowel_a",
        Pattern::Regex(r"\bvowel\s+a\b"),
        Effect::Character('a'),
    ),
];

/// Compiled expressions keyed by their source text.
static COMPILED: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    RULE_ORDER
        .iter()
        .filter_map(|rule| match rule.pattern {
            Pattern::Regex(source) => {
                Some((source, Regex::new(source).expect("valid rule pattern")))
            }
            Pattern::Phrase(_) => None,
        })
        .collect()
});

/// One place a rule fired in the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'q> {
    /// Captured text, if the pattern has a capture group.
    pub capture: Option<&'q str>,
    /// Byte offset of the capture (or of the whole match) in the query.
    pub offset: usize,
}

impl Rule {
    /// Every place this rule fires in `query`, in text order.
    ///
    /// `query` must already be lower-cased.
    pub fn hits<'q>(&self, query: &'q str) -> Vec<Hit<'q>> {
        match self.pattern {
            Pattern::Phrase(phrases) => phrases
                .iter()
                .filter_map(|phrase| query.find(phrase))
                .min()
                .map(|offset| Hit {
                    capture: None,
                    offset,
                })
                .into_iter()
                .collect(),
            Pattern::Regex(source) => {
                let Some(regex) = COMPILED.get(source) else {
                    return Vec::new();
                };
                regex
                    .captures_iter(query)
                    .filter_map(|caps| {
                        let whole = caps.get(0)?;
                        Some(match caps.get(1) {
                            Some(group) => Hit {
                                capture: Some(group.as_str()),
                                offset: group.start(),
                            },
                            None => Hit {
                                capture: None,
                                offset: whole.start(),
                            },
                        })
                    })
                    .collect()
            }
        }
    }
}
