use crate::constants::{exit_codes, verbosity, DEFAULT_COPY_JOBS, TEMPLATE_ENV};
use crate::report::{self, Tone};
use clap::{error::ErrorKind, Parser};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for neta.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the project directory to create.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Template root to mirror (defaults to the directory above the executable's).
    #[arg(short, long, value_name = "DIR", env = TEMPLATE_ENV)]
    pub template: Option<PathBuf>,

    /// Directory the project is created in (defaults to the current directory).
    #[arg(short = 'C', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Package-manager initializer run inside the new project.
    #[arg(long = "package-init", value_name = "CMD")]
    pub package_init: Option<String>,

    /// Version-control initializer run inside the new project.
    #[arg(long = "vcs-init", value_name = "CMD")]
    pub vcs_init: Option<String>,

    /// Number of threads copying files.
    #[arg(short, long, default_value_t = DEFAULT_COPY_JOBS)]
    pub jobs: usize,

    /// Keep going when individual files fail to copy.
    #[arg(long = "allow-partial")]
    pub allow_partial: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable colored status output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Prints the usage hint shown when no project name is given.
pub fn print_usage_hint() {
    let bin = env!("CARGO_PKG_NAME");
    report::error("Please provide a name for your project.", Tone::Error);
    report::error("Use case example: ", Tone::Muted);
    report::error(format!("    {bin} my-app"), Tone::Muted);
}

/// Parse command line arguments with custom handling for a missing project name.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            print_usage_hint();
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
