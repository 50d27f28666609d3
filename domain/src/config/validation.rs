//! Configuration issues reported by config validation.
//!
//! Invalid settings never abort loading; they are reported with a
//! [`Severity`] so the caller can decide whether to continue.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// `generation.max_attempts` is zero: the generator would never be called.
    ZeroAttempts,
    /// `generation.command` is empty or starts with an empty program name.
    EmptyGenerationCommand,
    /// `fidelity.min_word_len` is zero: every word counts as significant.
    ZeroWordLength,
    /// `fidelity.min_word_matches` is zero: the word check always passes.
    ZeroWordMatches,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Check whether any issue in a list is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let e = ConfigIssue::error(ConfigIssueCode::ZeroAttempts, "no attempts");
        assert_eq!(e.severity, Severity::Error);
        let w = ConfigIssue::warning(ConfigIssueCode::ZeroWordLength, "lenient");
        assert_eq!(w.severity, Severity::Warning);
        assert_eq!(w.message, "lenient");
    }

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::ZeroWordMatches, "w"),
            ConfigIssue::error(ConfigIssueCode::EmptyGenerationCommand, "e"),
        ];
        assert!(ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::warning(ConfigIssueCode::ZeroWordLength, "w")];
        assert!(!ConfigIssue::has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!ConfigIssue::has_errors(&[]));
    }
}
