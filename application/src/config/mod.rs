//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`GenerationParams`]: generation loop control (attempts, timeout, fallback, fidelity)

pub mod generation_params;

pub use generation_params::GenerationParams;
