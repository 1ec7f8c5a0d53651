//! CLI command implementations

pub mod completions;
pub mod dashboard;
pub mod export;
pub mod list;
pub mod reset;
pub mod submit;
