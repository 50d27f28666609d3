//! Fidelity check configuration from TOML (`[fidelity]` section)

use planner_domain::FidelityPolicy;
use serde::{Deserialize, Serialize};

/// Raw fidelity configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFidelityConfig {
    /// Significant words that must survive in a generated course name
    pub min_word_matches: usize,
    /// Words shorter than this are ignored
    pub min_word_len: usize,
}

impl Default for FileFidelityConfig {
    fn default() -> Self {
        let policy = FidelityPolicy::default();
        Self {
            min_word_matches: policy.min_word_matches,
            min_word_len: policy.min_word_len,
        }
    }
}

impl FileFidelityConfig {
    pub fn to_policy(&self) -> FidelityPolicy {
        FidelityPolicy::default()
            .with_min_word_matches(self.min_word_matches)
            .with_min_word_len(self.min_word_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_domain_policy() {
        assert_eq!(
            FileFidelityConfig::default().to_policy(),
            FidelityPolicy::default()
        );
    }

    #[test]
    fn test_partial_section() {
        let toml_str = r#"
[fidelity]
min_word_matches = 1
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fidelity.min_word_matches, 1);
        assert_eq!(config.fidelity.min_word_len, 3);
    }
}
