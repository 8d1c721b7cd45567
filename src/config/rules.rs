//! Skip rules applied while mirroring a template tree.

use serde::Deserialize;

use crate::constants::skip;

/// Immutable filtering policy handed to the copy planner.
///
/// Evaluation only looks at an entry's name, its extension candidates and
/// where it sits in the tree (directly under the template root, inside an
/// exception directory), so the same entry always gets the same decision.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SkipRules {
    /// Directory names never mirrored, matched against the lowercased name.
    pub dirs: Vec<String>,
    /// File names never mirrored, matched against the lowercased name.
    pub files: Vec<String>,
    /// Single extensions skipped everywhere, matched case-sensitively.
    pub extensions_always: Vec<String>,
    /// Extensions skipped outside the template root and exception directories.
    pub extensions_conditional: Vec<String>,
    /// Directory names that disable conditional skipping for their subtree.
    pub exception_dirs: Vec<String>,
}

impl Default for SkipRules {
    fn default() -> Self {
        Self {
            dirs: to_owned(skip::DIRS),
            files: to_owned(skip::FILES),
            extensions_always: to_owned(skip::EXTENSIONS_ALWAYS),
            extensions_conditional: to_owned(skip::EXTENSIONS_CONDITIONAL),
            exception_dirs: to_owned(skip::EXCEPTION_DIRS),
        }
    }
}

/// What the planner does with a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    Copy,
    /// Single extension is in the always-skip set.
    SkipAlways,
    /// An extension candidate is in the conditional set and neither the
    /// template root nor an exception directory protects the file.
    SkipConditional,
}

/// The two extensions a file name is checked against.
///
/// For `foo.d.ts` these are `.ts` and `.d.ts`. The compound extension is
/// lowercased, the single one is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCandidates {
    pub single: String,
    pub compound: String,
}

impl ExtensionCandidates {
    pub fn from_file_name(name: &str) -> Self {
        let segments: Vec<&str> = name.split('.').collect();
        let last = segments.len() - 1;
        let single = format!(".{}", segments[last]);
        let compound =
            format!(".{}", segments[last.saturating_sub(1)..].join(".")).to_lowercase();
        Self { single, compound }
    }
}

impl SkipRules {
    /// Returns `true` when the entry is excluded by name, whatever its type.
    pub fn is_skipped_name(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        contains_lowercase(&self.dirs, &name) || contains_lowercase(&self.files, &name)
    }

    /// Returns `true` when `name` starts an exception context.
    pub fn is_exception_dir(&self, name: &str) -> bool {
        self.exception_dirs.iter().any(|dir| dir == name)
    }

    /// Decides whether a file is copied.
    ///
    /// # Arguments
    /// * `name` - File name without its directory
    /// * `at_root` - The file sits directly under the template root
    /// * `in_exception` - An ancestor directory started an exception context
    pub fn file_decision(&self, name: &str, at_root: bool, in_exception: bool) -> FileDecision {
        let ExtensionCandidates { single, compound } =
            ExtensionCandidates::from_file_name(name);

        if self.extensions_always.iter().any(|ext| *ext == single) {
            return FileDecision::SkipAlways;
        }

        if !at_root
            && !in_exception
            && self
                .extensions_conditional
                .iter()
                .any(|ext| *ext == single || *ext == compound)
        {
            return FileDecision::SkipConditional;
        }

        FileDecision::Copy
    }

    /// Adds a file name to the skip list unless it is already there.
    pub fn skip_file<S: Into<String>>(&mut self, name: S) {
        let name = name.into().to_lowercase();
        if !contains_lowercase(&self.files, &name) {
            self.files.push(name);
        }
    }
}

fn contains_lowercase(list: &[String], lowercased: &str) -> bool {
    list.iter().any(|entry| entry.to_lowercase() == lowercased)
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_single_and_compound_extensions() {
        let candidates = ExtensionCandidates::from_file_name("foo.d.ts");
        assert_eq!(candidates.single, ".ts");
        assert_eq!(candidates.compound, ".d.ts");

        let candidates = ExtensionCandidates::from_file_name("bundle.JS.Map");
        assert_eq!(candidates.single, ".Map");
        assert_eq!(candidates.compound, ".js.map");
    }

    #[test]
    fn dotless_names_use_the_whole_name() {
        let candidates = ExtensionCandidates::from_file_name("Makefile");
        assert_eq!(candidates.single, ".Makefile");
        assert_eq!(candidates.compound, ".makefile");
    }

    #[test]
    fn hidden_files_use_their_name_as_extension() {
        let candidates = ExtensionCandidates::from_file_name(".DS_Store");
        assert_eq!(candidates.single, ".DS_Store");
        assert_eq!(candidates.compound, "..ds_store");
    }

    #[test]
    fn skipped_names_are_case_insensitive() {
        let rules = SkipRules::default();
        assert!(rules.is_skipped_name("README.md"));
        assert!(rules.is_skipped_name("Node_Modules"));
        assert!(rules.is_skipped_name("LICENSE"));
        assert!(!rules.is_skipped_name("index.html"));
    }

    #[test]
    fn always_skipped_extensions_ignore_location() {
        let rules = SkipRules::default();
        assert_eq!(rules.file_decision(".DS_Store", true, false), FileDecision::SkipAlways);
        assert_eq!(rules.file_decision(".DS_Store", false, true), FileDecision::SkipAlways);
    }

    #[test]
    fn both_ds_store_spellings_are_skipped_case_sensitively() {
        let rules = SkipRules::default();
        assert_eq!(rules.file_decision(".ds_store", false, false), FileDecision::SkipAlways);
        assert_eq!(rules.file_decision(".DS_Store", false, false), FileDecision::SkipAlways);
        assert_eq!(rules.file_decision(".Ds_Store", false, false), FileDecision::Copy);
    }

    #[test]
    fn root_files_are_exempt_from_conditional_skipping() {
        let rules = SkipRules::default();
        assert_eq!(rules.file_decision("webpack.config.js", true, false), FileDecision::Copy);
        assert_eq!(
            rules.file_decision("webpack.config.js", false, false),
            FileDecision::SkipConditional
        );
    }

    #[test]
    fn exception_context_keeps_conditional_extensions() {
        let rules = SkipRules::default();
        assert_eq!(rules.file_decision("foo.d.ts", false, true), FileDecision::Copy);
        assert_eq!(rules.file_decision("foo.d.ts", false, false), FileDecision::SkipConditional);
        assert_eq!(rules.file_decision("app.js.map", false, false), FileDecision::SkipConditional);
        assert_eq!(rules.file_decision("app.ts", false, false), FileDecision::Copy);
    }

    #[test]
    fn exception_dirs_match_exactly() {
        let rules = SkipRules::default();
        assert!(rules.is_exception_dir("src"));
        assert!(rules.is_exception_dir("server"));
        assert!(!rules.is_exception_dir("Src"));
        assert!(!rules.is_exception_dir("lib"));
    }

    #[test]
    fn skip_file_does_not_duplicate_entries() {
        let mut rules = SkipRules::default();
        let before = rules.files.len();
        rules.skip_file("README.md");
        assert_eq!(rules.files.len(), before);
        rules.skip_file("neta.yaml");
        assert_eq!(rules.files.len(), before + 1);
        assert!(rules.is_skipped_name("neta.yaml"));
    }
}
