//! Configuration management for neta templates
//!
//! This module contains the configuration system components:
//! - `rules`: Skip rules deciding which template entries are mirrored
//! - `loader`: Template configuration file loading and parsing

pub mod loader;
pub mod rules;


// Re-export commonly used types for convenience
pub use loader::Config;
pub use rules::{ExtensionCandidates, FileDecision, SkipRules};
