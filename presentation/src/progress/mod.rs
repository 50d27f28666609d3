//! Progress reporters for the generation use case

pub mod reporter;
