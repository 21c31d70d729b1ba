//! Search and rule configuration.

use serde::{Deserialize, Serialize};

/// Rule parameters the engine consults while resolving choices.
///
/// These cover the handful of knobs that are genuinely tunable rather
/// than part of a card's fixed identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Longshot scan radius.
    pub aim_radius: i32,
    /// Arclight's total-hit cap is `chain_hit_factor * level`.
    pub chain_hit_factor: u32,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { aim_radius: 3, chain_hit_factor: 2 }
    }
}

/// Configuration for one search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub rules: RuleConfig,
    /// Abort after this many branch expansions; 0 means unlimited.
    pub max_branches: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { rules: RuleConfig::default(), max_branches: 0 }
    }
}

impl SearchConfig {
    /// Builder-style branch budget.
    #[must_use]
    pub fn with_max_branches(mut self, max_branches: u64) -> Self {
        self.max_branches = max_branches;
        self
    }

    /// Builder-style rule override.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.rules.aim_radius, 3);
        assert_eq!(config.rules.chain_hit_factor, 2);
        assert_eq!(config.max_branches, 0);
    }

    #[test]
    fn test_builders() {
        let config = SearchConfig::default()
            .with_max_branches(10_000)
            .with_rules(RuleConfig { aim_radius: 2, chain_hit_factor: 3 });
        assert_eq!(config.max_branches, 10_000);
        assert_eq!(config.rules.aim_radius, 2);
    }
}
