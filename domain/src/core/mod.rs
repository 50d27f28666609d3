//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: text normalization used by classification and fidelity checks

pub mod error;
pub mod string;
