#![allow(dead_code)]

use neta::cli::{run, Args};
use neta::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const TEMPLATE_MANIFEST: &str = r#"{
  "name": "neta",
  "version": "0.3.0",
  "license": "MIT",
  "author": "Template Author",
  "repository": { "type": "git", "url": "https://github.com/pdl39/neta.git" },
  "main": "index.html",
  "scripts": {
    "start": "parcel index.html",
    "build": "parcel build index.html"
  },
  "dependencies": { "react": "^18.2.0", "react-dom": "^18.2.0", "zustand": "^4.3.0" },
  "devDependencies": { "parcel": "^2.8.0" },
  "engines": { "node": ">=16" }
}"#;

pub const GITIGNORE: &str = "node_modules\ndist\n.cache\n";

/// Files the template holds, relative to its root.
pub const TEMPLATE_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "README.md",
    "LICENSE",
    "CHANGELOG.md",
    ".gitignore",
    ".DS_Store",
    "index.html",
    "webpack.config.js",
    "src/.DS_Store",
    "src/index.ts",
    "src/foo.d.ts",
    "src/components/deep/app.js",
    "server/index.js",
    "server/routes/api.js.map",
    "lib/foo.d.ts",
    "lib/util.ts",
    "lib/bundle.js",
    "lib/bundle.js.map",
    "public/styles/site.css",
    "node_modules/react/index.js",
    "dist/bundle.js",
    ".cache/entry",
    "bin/neta.js",
    "temp/gitignore.txt",
    ".git/HEAD",
];

/// Files that must show up in a mirrored project, relative to its root.
pub const MIRRORED_FILES: &[&str] = &[
    "index.html",
    "webpack.config.js",
    "src/index.ts",
    "src/foo.d.ts",
    "src/components/deep/app.js",
    "server/index.js",
    "server/routes/api.js.map",
    "lib/util.ts",
    "public/styles/site.css",
];

/// Writes a template tree with every kind of entry the skip rules care about.
pub fn create_template(root: &Path) {
    for relative in TEMPLATE_FILES {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let content = match *relative {
            "package.json" => TEMPLATE_MANIFEST.to_string(),
            "temp/gitignore.txt" => GITIGNORE.to_string(),
            other => format!("content of {other}\n"),
        };
        fs::write(path, content).unwrap();
    }
    // An empty directory is mirrored as well.
    fs::create_dir_all(root.join("public/images")).unwrap();
}

/// Builds the tree a plain mirror of [`create_template`] must produce.
pub fn create_expected_mirror(root: &Path) {
    for relative in MIRRORED_FILES {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, format!("content of {relative}\n")).unwrap();
    }
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::create_dir_all(root.join("public/images")).unwrap();
}

/// Arguments for a run that never touches the network or the real package manager.
pub fn scaffold_args(template: &Path, base: &Path, name: &str) -> Args {
    Args {
        project_name: name.to_string(),
        template: Some(template.to_path_buf()),
        output_dir: Some(base.to_path_buf()),
        package_init: Some(r#"echo '{"name": "from-package-init"}' > package.json"#.to_string()),
        vcs_init: Some(vcs_init_command().to_string()),
        jobs: 4,
        allow_partial: false,
        dry_run: false,
        no_color: false,
        verbose: 2,
    }
}

pub fn run_scaffold(args: Args) -> Result<()> {
    run(args)
}

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// `git init` when git is installed, otherwise a stand-in creating `.git`.
pub fn vcs_init_command() -> &'static str {
    if git_available() {
        "git init --quiet"
    } else {
        "mkdir .git"
    }
}

/// Relative paths of every file below `root`, sorted.
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1: std::collections::HashSet<_> = list_files(dir1).into_iter().collect();
    let files2: std::collections::HashSet<_> = list_files(dir2).into_iter().collect();

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        if fs::read(dir1.join(file)).unwrap() != fs::read(dir2.join(file)).unwrap() {
            println!("  ~ {:?}", file);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing the differences otherwise.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}
