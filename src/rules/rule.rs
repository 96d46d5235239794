//! The rule model: one ordered transformation step.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::EngineFault;
use crate::languages::Language;

/// Where a rule's pattern is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Anywhere in the text, including mid-line.
    Text,

    /// Anchors (`^`, `$`) align to line boundaries. This keeps a rule meant
    /// for a trailing line terminator (e.g. a block-opening colon at end of
    /// line) from firing on an unrelated mid-line token sequence.
    Line,
}

/// One pattern-substitution step.
///
/// A rule is pure data: a regex pattern with capture groups, a replacement
/// template referencing them (`${1}`, `${2}`, ...), and a scope. It holds no
/// state between invocations; applying it is a pure function of the input
/// text. Patterns are compiled lazily on first application and cached, so a
/// malformed pattern surfaces as an [`EngineFault`] from `apply`, never as a
/// panic at process start.
#[derive(Debug)]
pub struct Rule {
    pattern: &'static str,
    replacement: &'static str,
    scope: RuleScope,
    compiled: OnceLock<Regex>,
}

impl Rule {
    pub const fn new(pattern: &'static str, replacement: &'static str, scope: RuleScope) -> Self {
        Self {
            pattern,
            replacement,
            scope,
            compiled: OnceLock::new(),
        }
    }

    /// A rule matching anywhere in the text.
    pub const fn text(pattern: &'static str, replacement: &'static str) -> Self {
        Self::new(pattern, replacement, RuleScope::Text)
    }

    /// A line-anchored rule.
    pub const fn line(pattern: &'static str, replacement: &'static str) -> Self {
        Self::new(pattern, replacement, RuleScope::Line)
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn scope(&self) -> RuleScope {
        self.scope
    }

    /// Replace every match of this rule's pattern in `input`.
    pub fn apply(&self, input: &str) -> Result<String, EngineFault> {
        Ok(self.regex()?.replace_all(input, self.replacement).into_owned())
    }

    fn regex(&self) -> Result<&Regex, EngineFault> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }
        let raw = match self.scope {
            RuleScope::Text => self.pattern.to_string(),
            RuleScope::Line => format!("(?m){}", self.pattern),
        };
        let regex = Regex::new(&raw).map_err(|source| EngineFault::InvalidRule {
            pattern: self.pattern.to_string(),
            source,
        })?;
        Ok(self.compiled.get_or_init(|| regex))
    }
}

/// An ordered sequence of rules for one ordered language pair.
#[derive(Debug)]
pub struct RuleSet {
    source: Language,
    target: Language,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(source: Language, target: Language, rules: Vec<Rule>) -> Self {
        Self {
            source,
            target,
            rules,
        }
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Language {
        self.target
    }

    /// The rules, in registration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
