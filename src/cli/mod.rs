pub mod args;
pub mod context;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, print_usage_hint, Args};
pub use context::ProjectContext;
pub use runner::run;
