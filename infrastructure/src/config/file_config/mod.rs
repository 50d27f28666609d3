//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod budget;
mod fidelity;
mod generation;
mod output;

pub use budget::FileBudgetConfig;
pub use fidelity::FileFidelityConfig;
pub use generation::FileGenerationConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use planner_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Budget strings copied onto every menu
    pub budget: FileBudgetConfig,
    /// External generator and retry loop
    pub generation: FileGenerationConfig,
    /// Fidelity check thresholds
    pub fidelity: FileFidelityConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// The generator command is only required by `generate`, so it is
    /// checked separately by [`FileGenerationConfig::command_issue`] unless
    /// a command is present but malformed.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.generation.max_attempts == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroAttempts,
                "generation.max_attempts must be at least 1",
            ));
        }

        if self.generation.has_command()
            && let Some(issue) = self.generation.command_issue()
        {
            issues.push(issue);
        }

        if self.fidelity.min_word_len == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroWordLength,
                "fidelity.min_word_len is 0: every word, however short, counts as significant",
            ));
        }

        if self.fidelity.min_word_matches == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroWordMatches,
                "fidelity.min_word_matches is 0: the word check accepts any course name",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_domain::{OutputFormat, Severity};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[budget]
food_cost = "$60-80 per guest"
wine_cost = "$40 per guest"

[generation]
command = ["llm", "-m", "gpt-4o"]
max_attempts = 3
timeout_seconds = 120
fallback = false

[fidelity]
min_word_matches = 3
min_word_len = 4

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.budget.food_cost,
            Some("$60-80 per guest".to_string())
        );
        assert_eq!(config.generation.command, vec!["llm", "-m", "gpt-4o"]);
        assert_eq!(config.generation.max_attempts, 3);
        assert_eq!(config.generation.timeout_seconds, Some(120));
        assert!(!config.generation.fallback);
        assert_eq!(config.fidelity.min_word_matches, 3);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generation]
max_attempts = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generation.max_attempts, 5);
        // Defaults should apply
        assert!(config.generation.fallback);
        assert!(config.budget.food_cost.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[generation]
command = [""]
max_attempts = 0

[fidelity]
min_word_matches = 0
min_word_len = 0
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::ZeroAttempts,
                ConfigIssueCode::EmptyGenerationCommand,
                ConfigIssueCode::ZeroWordLength,
                ConfigIssueCode::ZeroWordMatches,
            ]
        );
        assert!(ConfigIssue::has_errors(&issues));
        assert_eq!(issues[2].severity, Severity::Warning);
    }

    #[test]
    fn test_missing_command_is_not_a_validation_issue() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.generation.command_issue().is_some());
    }
}
