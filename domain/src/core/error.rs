//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The course assignment engine itself never fails on host text; these
/// errors only arise at the edges where structured data is parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown course slot: {0}")]
    UnknownCourseSlot(String),

    #[error("Malformed menu response: {0}")]
    MalformedResponse(String),
}

impl DomainError {
    /// Check if this error came from parsing a generator response
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, DomainError::MalformedResponse(_))
    }
}
