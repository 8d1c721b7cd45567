use std::fmt::Display;
use std::path::PathBuf;

/// Why the planner left an entry out of the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Name is in the skipped directories or files.
    Name,
    /// Single extension is always skipped.
    AlwaysSkippedExtension,
    /// Compiled or derived artifact outside the root and exception directories.
    ConditionalExtension,
    /// Neither a regular file nor a directory.
    UnsupportedType,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipReason::Name => "matches a skipped name",
            SkipReason::AlwaysSkippedExtension => "extension is always skipped",
            SkipReason::ConditionalExtension => "derived artifact outside source directories",
            SkipReason::UnsupportedType => "not a regular file or directory",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOperation {
    CreateDirectory { source: PathBuf, target: PathBuf },
    Copy { source: PathBuf, target: PathBuf },
    Skip { source: PathBuf, reason: SkipReason },
}

impl CopyOperation {
    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            CopyOperation::CreateDirectory { target, .. } => {
                format!("{}Creating directory '{}'", prefix, target.display())
            }
            CopyOperation::Copy { source, target } => {
                format!(
                    "{}Copying '{}' to '{}'",
                    prefix,
                    source.display(),
                    target.display()
                )
            }
            CopyOperation::Skip { source, reason } => {
                format!("{}Skipping '{}' ({})", prefix, source.display(), reason)
            }
        }
    }
}
