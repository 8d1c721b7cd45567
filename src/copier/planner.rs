use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{FileDecision, SkipRules};
use crate::error::Result;

use super::operation::{CopyOperation, SkipReason};

/// Position of the walk inside the mirrored tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyContext {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Outermost exception directory above the current position, if any.
    pub exception_dir: Option<String>,
}

impl CopyContext {
    pub fn root<P: AsRef<Path>, Q: AsRef<Path>>(source_dir: P, dest_dir: Q) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            dest_dir: dest_dir.as_ref().to_path_buf(),
            exception_dir: None,
        }
    }

    /// Context for the subdirectory `name`.
    ///
    /// An exception context inherited from an ancestor always wins over the
    /// subdirectory's own name. Paths keep the raw name; only rule matching
    /// sees its lossy UTF-8 form.
    pub fn descend<S: AsRef<OsStr>>(&self, name: S, rules: &SkipRules) -> Self {
        let name = name.as_ref();
        let matched = name.to_string_lossy();
        let exception_dir = match &self.exception_dir {
            Some(inherited) => Some(inherited.clone()),
            None if rules.is_exception_dir(&matched) => Some(matched.into_owned()),
            None => None,
        };
        Self {
            source_dir: self.source_dir.join(name),
            dest_dir: self.dest_dir.join(name),
            exception_dir,
        }
    }
}

/// Ordered list of operations mirroring a template tree.
///
/// Directories always precede their descendants.
#[derive(Debug, Default)]
pub struct CopyPlan {
    pub operations: Vec<CopyOperation>,
}

impl CopyPlan {
    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.operations.iter().filter_map(|op| match op {
            CopyOperation::CreateDirectory { target, .. } => Some(target),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = (&PathBuf, &PathBuf)> {
        self.operations.iter().filter_map(|op| match op {
            CopyOperation::Copy { source, target } => Some((source, target)),
            _ => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&PathBuf, SkipReason)> {
        self.operations.iter().filter_map(|op| match op {
            CopyOperation::Skip { source, reason } => Some((source, *reason)),
            _ => None,
        })
    }
}

/// Walks a template tree and decides what to mirror, without touching the
/// destination.
pub struct CopyPlanner<'a, P: AsRef<Path>> {
    rules: &'a SkipRules,
    template_root: P,
    output_root: P,
}

impl<'a, P: AsRef<Path>> CopyPlanner<'a, P> {
    pub fn new(rules: &'a SkipRules, template_root: P, output_root: P) -> Self {
        Self { rules, template_root, output_root }
    }

    /// Plans the mirror of the whole template tree.
    pub fn plan(&self) -> Result<CopyPlan> {
        let root = CopyContext::root(&self.template_root, &self.output_root);
        // contexts[d] describes the directory holding entries at depth d + 1
        let mut contexts = vec![root];
        let mut plan = CopyPlan::default();

        let mut walker = WalkDir::new(self.template_root.as_ref())
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = entry?;
            let depth = entry.depth();
            contexts.truncate(depth);
            let parent = &contexts[depth - 1];
            let source = entry.path().to_path_buf();
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let file_type = entry.file_type();

            if self.rules.is_skipped_name(&name) {
                if file_type.is_dir() {
                    walker.skip_current_dir();
                }
                plan.operations.push(CopyOperation::Skip { source, reason: SkipReason::Name });
                continue;
            }

            if file_type.is_file() {
                let operation = self.plan_file(parent, file_name, &name, source, depth == 1);
                plan.operations.push(operation);
            } else if file_type.is_dir() {
                let context = parent.descend(file_name, self.rules);
                plan.operations.push(CopyOperation::CreateDirectory {
                    source,
                    target: context.dest_dir.clone(),
                });
                contexts.push(context);
            } else {
                plan.operations
                    .push(CopyOperation::Skip { source, reason: SkipReason::UnsupportedType });
            }
        }

        Ok(plan)
    }

    fn plan_file(
        &self,
        context: &CopyContext,
        file_name: &OsStr,
        name: &str,
        source: PathBuf,
        at_root: bool,
    ) -> CopyOperation {
        let in_exception = context.exception_dir.is_some();
        match self.rules.file_decision(name, at_root, in_exception) {
            FileDecision::Copy => {
                CopyOperation::Copy { source, target: context.dest_dir.join(file_name) }
            }
            FileDecision::SkipAlways => {
                CopyOperation::Skip { source, reason: SkipReason::AlwaysSkippedExtension }
            }
            FileDecision::SkipConditional => {
                CopyOperation::Skip { source, reason: SkipReason::ConditionalExtension }
            }
        }
    }
}
