//! Translation rules: the per-language-pair substitution tables.
//!
//! A rule set is an ordered list of pattern-substitution rules for exactly
//! one ordered language pair. Order is significant — later rules operate on
//! the output of earlier rules — and rule sets are immutable once the
//! registry is built. Pairs are directional: (A, B) is authored and stored
//! independently of (B, A), and a pair may be supported in one direction
//! only.

mod catalog;
mod registry;
mod rule;

pub use registry::RuleSetRegistry;
pub use rule::{Rule, RuleScope, RuleSet};
