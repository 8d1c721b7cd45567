//! Constants used throughout the neta application

/// Template configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["neta.json", "neta.yaml", "neta.yml"];

/// Package manifest file name, both in the template and in the new project
pub const MANIFEST_FILE: &str = "package.json";

/// Ignore-file source, relative to the template root
pub const DEFAULT_IGNORE_FILE_SOURCE: &str = "temp/gitignore.txt";

/// Name the ignore-file receives inside the new project
pub const IGNORE_FILE_TARGET: &str = ".gitignore";

/// Package-manager initializer run inside the new project directory
pub const DEFAULT_PACKAGE_INIT: &str = "npm init -y";

/// Version-control initializer run inside the new project directory
pub const DEFAULT_VCS_INIT: &str = "git init";

/// Environment variable that points at the template root
pub const TEMPLATE_ENV: &str = "NETA_TEMPLATE";

/// Number of worker threads used to copy files
pub const DEFAULT_COPY_JOBS: usize = 4;

/// Fixed fields of every generated manifest
pub mod manifest_defaults {
    pub const VERSION: &str = "1.0.0";
    pub const LICENSE: &str = "ISC";
}

/// Default skip rules applied while mirroring the template tree
pub mod skip {
    /// Directory names never mirrored (compared lowercased)
    pub const DIRS: &[&str] = &[".git", ".cache", "node_modules", "dist", "bin", "temp"];

    /// File names never mirrored (compared lowercased)
    pub const FILES: &[&str] = &[
        "changelog.md",
        "license",
        "license.md",
        "readme.md",
        "package.json",
        "package-lock.json",
        ".gitignore",
    ];

    /// Single extensions skipped everywhere (case-sensitive)
    pub const EXTENSIONS_ALWAYS: &[&str] = &[".ds_store", ".DS_Store"];

    /// Extensions skipped outside the template root and exception directories
    pub const EXTENSIONS_CONDITIONAL: &[&str] = &[".js", ".js.map", ".d.ts"];

    /// Directories whose subtree keeps conditionally skipped extensions
    pub const EXCEPTION_DIRS: &[&str] = &["src", "server"];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
