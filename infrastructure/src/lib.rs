//! Infrastructure layer for course-planner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generator;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileBudgetConfig, FileConfig, FileFidelityConfig, FileGenerationConfig,
    FileOutputConfig, FileOutputFormat,
};
pub use generator::CommandMenuGenerator;
