use rayon::prelude::*;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::ioutils::{copy_file, create_dir};

use super::planner::CopyPlan;

/// Result of copying a single file.
#[derive(Debug)]
pub struct CopyOutcome {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Bytes copied, or why the copy failed.
    pub result: Result<u64>,
}

impl CopyOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every per-file outcome of an executed plan.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub directories: usize,
    pub skipped: usize,
    pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
    pub fn copied(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_success()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CopyOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Converts the report into an error when any file failed.
    pub fn into_result(self) -> Result<Self> {
        let failed = self.failures().count();
        if failed == 0 {
            Ok(self)
        } else {
            Err(Error::CopyFailed { failed, total: self.outcomes.len() })
        }
    }
}

/// Applies a [`CopyPlan`] to the filesystem.
///
/// Directories are created first, in plan order. Files are then copied on a
/// bounded worker pool and `execute` only returns once every copy settled.
pub struct CopyExecutor {
    jobs: usize,
}

impl CopyExecutor {
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }

    pub fn execute(&self, plan: &CopyPlan) -> Result<CopyReport> {
        let mut directories = 0;
        for target in plan.directories() {
            log::debug!("Creating directory '{}'", target.display());
            create_dir(target)?;
            directories += 1;
        }

        let files: Vec<(&PathBuf, &PathBuf)> = plan.files().collect();
        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build()?;

        let outcomes: Vec<CopyOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|(source, target)| {
                    let result = copy_file(source, target);
                    match &result {
                        Ok(bytes) => log::info!(
                            "Copied '{}' to '{}' ({} bytes)",
                            source.display(),
                            target.display(),
                            bytes
                        ),
                        Err(e) => log::error!("Failed to copy '{}': {}", source.display(), e),
                    }
                    CopyOutcome {
                        source: source.to_path_buf(),
                        target: target.to_path_buf(),
                        result,
                    }
                })
                .collect()
        });

        Ok(CopyReport { directories, skipped: plan.skipped().count(), outcomes })
    }
}
