//! Configuration file loading for course-planner
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./course-planner.toml` or `./.course-planner.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/course-planner/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileBudgetConfig, FileConfig, FileFidelityConfig, FileGenerationConfig, FileOutputConfig,
    FileOutputFormat,
};
pub use loader::ConfigLoader;
