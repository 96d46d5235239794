//! Rule set registry: ordered-pair lookup over the built-in catalog.
//!
//! Singleton with `OnceLock`, same shape as the language registry. The
//! registry exposes no mutation after initialization; supporting a new pair
//! means extending the catalog and redeploying, not a runtime API.

use std::sync::OnceLock;

use crate::languages::Language;
use crate::rules::catalog;
use crate::rules::RuleSet;

/// Global rule set registry singleton.
pub struct RuleSetRegistry {
    rule_sets: Vec<RuleSet>,
}

static REGISTRY: OnceLock<RuleSetRegistry> = OnceLock::new();

impl RuleSetRegistry {
    /// Get the global registry, initializing it from the catalog on first
    /// access.
    pub fn get() -> &'static RuleSetRegistry {
        REGISTRY.get_or_init(|| RuleSetRegistry {
            rule_sets: catalog::default_rule_sets(),
        })
    }

    /// Look up the rule set for an *ordered* language pair.
    ///
    /// `None` means the pair has no registered rules — that is a normal
    /// outcome handled by the passthrough policy, not an error.
    pub fn lookup(&self, source: Language, target: Language) -> Option<&RuleSet> {
        self.rule_sets
            .iter()
            .find(|set| set.source() == source && set.target() == target)
    }

    /// Every ordered pair with a registered rule set.
    pub fn supported_pairs(&self) -> Vec<(Language, Language)> {
        self.rule_sets
            .iter()
            .map(|set| (set.source(), set.target()))
            .collect()
    }
}
