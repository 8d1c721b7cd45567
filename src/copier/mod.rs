//! Filtered mirroring of a template tree into a new project
//!
//! This module contains the copy components:
//! - `operation`: Operations planned for each template entry
//! - `planner`: Walks the template and applies the skip rules
//! - `executor`: Performs a plan and collects per-file outcomes

pub mod executor;
pub mod operation;
pub mod planner;

pub use executor::{CopyExecutor, CopyOutcome, CopyReport};
pub use operation::{CopyOperation, SkipReason};
pub use planner::{CopyContext, CopyPlan, CopyPlanner};

use std::path::Path;

use crate::config::SkipRules;
use crate::error::Result;

/// Plans and executes the mirror of `template_root` into `output_root`.
pub fn copy_tree<P: AsRef<Path>>(
    rules: &SkipRules,
    template_root: P,
    output_root: P,
    jobs: usize,
) -> Result<CopyReport> {
    let plan = CopyPlanner::new(rules, template_root, output_root).plan()?;
    CopyExecutor::new(jobs).execute(&plan)
}
