//! Generation configuration from TOML (`[generation]` section)
//!
//! Controls the external menu-generation command and the retry loop.
//!
//! ```toml
//! [generation]
//! command = ["llm", "-m", "gpt-4o"]
//! max_attempts = 3
//! timeout_seconds = 120
//! fallback = true
//! ```

use planner_application::GenerationParams;
use planner_domain::{ConfigIssue, ConfigIssueCode, FidelityPolicy};
use serde::{Deserialize, Serialize};

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Program and arguments of the generator command (prompts go to stdin)
    pub command: Vec<String>,
    /// Generator calls before giving up
    pub max_attempts: usize,
    /// Per-call timeout; 0 disables it
    pub timeout_seconds: Option<u64>,
    /// Fall back to deterministic menus after the last failed attempt
    pub fallback: bool,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            command: Vec::new(),
            max_attempts: params.max_attempts,
            timeout_seconds: params.timeout.map(|t| t.as_secs()),
            fallback: params.fallback_on_failure,
        }
    }
}

impl FileGenerationConfig {
    /// Whether a generator command is configured at all
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }

    /// Convert to application-level generation parameters
    pub fn to_generation_params(&self, fidelity: FidelityPolicy) -> GenerationParams {
        GenerationParams::default()
            .with_max_attempts(self.max_attempts)
            .with_timeout_seconds(self.timeout_seconds.filter(|s| *s > 0))
            .with_fallback(self.fallback)
            .with_fidelity(fidelity)
    }

    /// Issue to report when generation is requested without a usable command
    pub fn command_issue(&self) -> Option<ConfigIssue> {
        match self.command.first() {
            None => Some(ConfigIssue::error(
                ConfigIssueCode::EmptyGenerationCommand,
                "generation.command is not set; add e.g. command = [\"llm\"] to [generation]",
            )),
            Some(program) if program.trim().is_empty() => Some(ConfigIssue::error(
                ConfigIssueCode::EmptyGenerationCommand,
                "generation.command: program name is empty",
            )),
            Some(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default() {
        let config = FileGenerationConfig::default();
        assert!(!config.has_command());
        assert_eq!(config.max_attempts, 2);
        assert_eq!(config.timeout_seconds, Some(90));
        assert!(config.fallback);
    }

    #[test]
    fn test_to_generation_params() {
        let config = FileGenerationConfig {
            command: vec!["llm".to_string()],
            max_attempts: 3,
            timeout_seconds: Some(0),
            fallback: false,
        };
        let params = config.to_generation_params(FidelityPolicy::default());
        assert_eq!(params.max_attempts, 3);
        assert!(params.timeout.is_none());
        assert!(!params.fallback_on_failure);

        let config = FileGenerationConfig {
            timeout_seconds: Some(15),
            ..config
        };
        let params = config.to_generation_params(FidelityPolicy::default());
        assert_eq!(params.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_command_issue() {
        let mut config = FileGenerationConfig::default();
        assert_eq!(
            config.command_issue().map(|i| i.code),
            Some(ConfigIssueCode::EmptyGenerationCommand)
        );

        config.command = vec![" ".to_string()];
        assert!(config.command_issue().is_some());

        config.command = vec!["llm".to_string(), "-m".to_string(), "gpt-4o".to_string()];
        assert!(config.command_issue().is_none());
    }
}
