//! Configuration loading and management

use crate::config::rules::SkipRules;
use crate::constants::{
    CONFIG_FILENAMES, DEFAULT_IGNORE_FILE_SOURCE, DEFAULT_PACKAGE_INIT, DEFAULT_VCS_INIT,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Template-level settings, optionally read from `neta.json`, `neta.yaml`
/// or `neta.yml` at the template root.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub skip_rules: SkipRules,
    #[serde(default = "get_default_package_init")]
    pub package_init: String,
    #[serde(default = "get_default_vcs_init")]
    pub vcs_init: String,
    /// Ignore-file source, relative to the template root.
    #[serde(default = "get_default_ignore_file")]
    pub ignore_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_rules: SkipRules::default(),
            package_init: get_default_package_init(),
            vcs_init: get_default_vcs_init(),
            ignore_file: get_default_ignore_file(),
        }
    }
}

impl Config {
    /// Loads the first config file found at the template root, falling back
    /// to the defaults when there is none.
    ///
    /// Config file names are always added to the skipped files so they never
    /// land in the generated project.
    pub fn load_config<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let template_root = template_root.as_ref();
        let mut config = Self::read_config_file(template_root)?.unwrap_or_default();

        for config_file_name in CONFIG_FILENAMES {
            config.skip_rules.skip_file(*config_file_name);
        }

        Ok(config)
    }

    fn read_config_file(template_root: &Path) -> Result<Option<Self>> {
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = template_root.join(config_file_name);

            if !config_file_path.exists() {
                continue;
            }

            log::debug!("Loading template config from {}", config_file_path.display());
            let content = std::fs::read_to_string(&config_file_path)?;
            let parsed: std::result::Result<Self, String> = match *config_file_name {
                "neta.json" => {
                    serde_json::from_str(&content).map_err(|e| e.to_string())
                }
                "neta.yaml" | "neta.yml" => {
                    serde_yaml::from_str(&content).map_err(|e| e.to_string())
                }
                _ => unreachable!(),
            };

            return parsed
                .map(Some)
                .map_err(|message| Error::ConfigParse { path: config_file_path, message });
        }

        log::debug!("No config file found in {}, using defaults", template_root.display());
        Ok(None)
    }
}

fn get_default_package_init() -> String {
    DEFAULT_PACKAGE_INIT.to_string()
}

fn get_default_vcs_init() -> String {
    DEFAULT_VCS_INIT.to_string()
}

fn get_default_ignore_file() -> PathBuf {
    PathBuf::from(DEFAULT_IGNORE_FILE_SOURCE)
}
