//! Runs the rule table over a query and accumulates a filter set.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use utoipa::ToSchema;

use strand_core::{Error, FilterSet, Result};

use crate::rules::{Effect, Hit, Rule, RULE_ORDER};

/// A query together with the filters it was understood as.
///
/// Callers echo this back so users can see how their text was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InterpretedQuery {
    /// The query exactly as supplied.
    pub original: String,
    pub parsed_filters: FilterSet,
    /// Names of the rules that fired, in evaluation order.
    #[serde(skip)]
    pub matched_rules: Vec<&'static str>,
}

/// Where the current `contains_character` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharacterSource {
    /// Captured from the query at this byte offset.
    Captured(usize),
    /// Set by a fixed-character rule; captured letters no longer replace it.
    Fixed,
}

/// Filter set under construction.
#[derive(Debug, Default)]
struct Accumulator {
    filters: FilterSet,
    character_source: Option<CharacterSource>,
    fired_groups: Vec<&'static str>,
    matched_rules: Vec<&'static str>,
}

impl Accumulator {
    fn run(&mut self, rule: &Rule, query: &str) {
        if let Some(group) = rule.group {
            if self.fired_groups.contains(&group) {
                return;
            }
        }

        let mut fired = false;
        for hit in rule.hits(query) {
            if self.apply(rule.effect, hit) {
                fired = true;
                if rule.effect.first_hit_only() {
                    break;
                }
            }
        }
        trace!(rule = rule.name, fired, "Evaluated rule");

        if fired {
            self.matched_rules.push(rule.name);
            if let Some(group) = rule.group {
                self.fired_groups.push(group);
            }
        }
    }

    /// Apply one hit. Returns false when the hit carried nothing usable.
    fn apply(&mut self, effect: Effect, hit: Hit<'_>) -> bool {
        match effect {
            Effect::Palindrome => {
                self.filters.is_palindrome = Some(true);
                true
            }
            Effect::WordCount(n) => {
                self.filters.word_count = Some(n);
                true
            }
            Effect::LongerThan => {
                set_number(&mut self.filters.min_length, hit, |n| n.checked_add(1))
            }
            Effect::ShorterThan => {
                set_number(&mut self.filters.max_length, hit, |n| n.checked_sub(1))
            }
            Effect::AtLeast => set_number(&mut self.filters.min_length, hit, Some),
            Effect::AtMost => set_number(&mut self.filters.max_length, hit, Some),
            Effect::CapturedCharacter => {
                let Some(c) = hit.capture.and_then(|s| s.chars().next()) else {
                    return false;
                };
                // The latest letter in the text wins; a fixed character is final
                let replaces = match self.character_source {
                    None => true,
                    Some(CharacterSource::Captured(offset)) => hit.offset >= offset,
                    Some(CharacterSource::Fixed) => false,
                };
                if replaces {
                    self.filters.contains_character = Some(c);
                    self.character_source = Some(CharacterSource::Captured(hit.offset));
                }
                true
            }
            Effect::Character(c) => {
                self.filters.contains_character = Some(c);
                self.character_source = Some(CharacterSource::Fixed);
                true
            }
        }
    }
}

fn set_number(slot: &mut Option<i64>, hit: Hit<'_>, adjust: impl Fn(i64) -> Option<i64>) -> bool {
    match hit
        .capture
        .and_then(|digits| digits.parse::<i64>().ok())
        .and_then(adjust)
    {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}

/// Interpret a free-text query as a filter set.
///
/// The query is lower-cased once and every rule of [`RULE_ORDER`] is run over
/// it in order. Fails with `Error::Unparseable` when no rule fires.
#[instrument(fields(subsystem = "query", component = "interpreter", op = "interpret"))]
pub fn interpret(query: &str) -> Result<InterpretedQuery> {
    let lowered = query.to_lowercase();

    let mut acc = Accumulator::default();
    for rule in RULE_ORDER {
        acc.run(rule, &lowered);
    }

    if acc.filters.is_empty() {
        debug!("No interpreter rule matched");
        return Err(Error::Unparseable(
            "Unable to parse natural language query".to_string(),
        ));
    }

    debug!(
        rules = ?acc.matched_rules,
        constraint_count = acc.filters.active_constraint_count(),
        "Interpreted query"
    );

    Ok(InterpretedQuery {
        original: query.to_string(),
        parsed_filters: acc.filters,
        matched_rules: acc.matched_rules,
    })
}
