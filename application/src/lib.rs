//! Application layer for course-planner
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    menu_generator::{GeneratorError, MenuGenerator},
    progress::{AttemptOutcome, NoProgress, ProgressNotifier},
};
pub use use_cases::plan_menus::{
    MenuSource, PlanMenusError, PlanMenusInput, PlanMenusOutput, PlanMenusUseCase,
    plan_deterministic,
};
