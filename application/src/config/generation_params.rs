//! Generation parameters for the use case loop.
//!
//! [`GenerationParams`] groups the static parameters that control the
//! generate-validate-retry loop in
//! [`PlanMenusUseCase`](crate::use_cases::plan_menus::PlanMenusUseCase).
//! These are application-layer concerns, not domain policy.

use planner_domain::FidelityPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generation loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum number of generator calls before giving up.
    pub max_attempts: usize,
    /// Timeout for each generator call.
    pub timeout: Option<Duration>,
    /// Return deterministic variants when every attempt fails.
    pub fallback_on_failure: bool,
    /// Thresholds for the fidelity check.
    pub fidelity: FidelityPolicy,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            timeout: Some(Duration::from_secs(90)),
            fallback_on_failure: true,
            fidelity: FidelityPolicy::default(),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_attempts(mut self, max: usize) -> Self {
        self.max_attempts = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout from an optional number of seconds.
    pub fn with_timeout_seconds(self, seconds: Option<u64>) -> Self {
        self.with_timeout(seconds.map(Duration::from_secs))
    }

    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback_on_failure = fallback;
        self
    }

    pub fn with_fidelity(mut self, fidelity: FidelityPolicy) -> Self {
        self.fidelity = fidelity;
        self
    }
}
