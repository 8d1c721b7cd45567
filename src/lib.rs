/// Handles argument parsing and the scaffolding pipeline.
pub mod cli;

/// Runs external initializer commands.
pub mod command;

/// Configuration handling for neta templates.
pub mod config;

/// Constants used throughout the application.
pub mod constants;

/// Mirrors a template tree into a new project.
pub mod copier;

/// Defines custom error types.
pub mod error;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Reads the template manifest and renders the project's one.
pub mod manifest;

/// Color-annotated console output.
pub mod report;
