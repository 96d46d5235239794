//! The text transformer: applies one rule set to one input.
//!
//! Fixed sequence, no special cases: strip source boilerplate first (when
//! the source language carries it), run every rule in registration order on
//! the cumulative text, wrap the target boilerplate last. Rules never race —
//! rule N+1 sees exactly rule N's output — so the only ordering hazard is an
//! unintended cascade, which the catalog's regression tests pin down.

use crate::error::EngineFault;
use crate::rules::RuleSet;

/// Apply `rule_set` to `input`, producing the translated text.
pub fn apply(rule_set: &RuleSet, input: &str) -> Result<String, EngineFault> {
    let mut text = match rule_set.source().boilerplate() {
        Some(template) => template.strip(input),
        None => input.to_string(),
    };

    for rule in rule_set.rules() {
        text = rule.apply(&text)?;
    }

    if let Some(template) = rule_set.target().boilerplate() {
        text = template.wrap(&text);
    }

    Ok(text)
}
