use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;
use crate::report::{self, Tone};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Invalid project name '{name}': {reason}.")]
    InvalidProjectName { name: String, reason: String },

    /// The project directory is already present; nothing has been touched.
    #[error("Cannot proceed: '{}' already exists.", path.display())]
    ProjectDirectoryExists { path: PathBuf },

    #[error("Cannot proceed: template directory '{}' does not exist.", template_dir.display())]
    TemplateNotFound { template_dir: PathBuf },

    #[error("Failed to start '{command}'. Original error: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// When the command has executed but finished with an error.
    #[error("Command '{command}' failed with status: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("{failed} of {total} files could not be copied.")]
    CopyFailed { failed: usize, total: usize },

    #[error("Failed to read manifest '{}'. Original error: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest '{}'. Original error: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write manifest '{}'. Original error: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to walk the template tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to start copy workers. Original error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
}

/// Convenience type alias for Results with neta's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the failure and exits the program.
///
/// The detailed error has already been shown by the stage that caught it, so
/// only the generic failure line is printed here; the detail goes to the log.
pub fn default_error_handler(err: Error) {
    log::debug!("{err}");
    report::error("Installation Failed.", Tone::Fatal);
    std::process::exit(exit_codes::FAILURE);
}
