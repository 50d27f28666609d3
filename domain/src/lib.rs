//! Domain layer for course-planner
//!
//! This crate contains the custom-course assignment engine and the menu
//! entities it produces. It has no dependencies on infrastructure or
//! presentation concerns, performs no I/O and keeps no state between calls.
//!
//! # Pipeline
//!
//! ```text
//! free text ──► extract_ideas ──► assign_slots ──┬──► build_variant_menus   (deterministic)
//!                                                └──► build_prompt ──► model ──► menus_respect_ideas
//! ```
//!
//! - **Course slots**: Amuse-Bouche, First Course, Second Course, Main Course, Dessert
//! - **Explicit tag**: a host-written prefix such as `"Main:"` that claims a slot
//! - **Inference**: keyword-based slot guess for untagged ideas
//! - **Positional fallback**: default slot order for ideas with no type signal
//! - **Fidelity check**: confirms generated menus kept the host's ideas

pub mod config;
pub mod core;
pub mod course;
pub mod fidelity;
pub mod menu;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::error::DomainError;
pub use course::{
    AssignedIdea, CourseIdea, CourseSlot, MAX_IDEAS, Placement, SlotAssignment, TaggedIdea,
    assign_slots, classify_by_keyword, extract_ideas, extract_ideas_opt, match_explicit_tag,
};
pub use fidelity::{
    FidelityPolicy, FidelityReport, MenuFidelity, SlotDrift, check_menus, menus_respect_ideas,
};
pub use menu::{
    BudgetContext, Course, MenuVariant, VariantStyle, build_variant_menus,
    build_variant_menus_from_ideas, parse_menus_response,
};
pub use prompt::{MenuPromptTemplate, build_prompt};
