//! Reading the template's `package.json` and rendering the new project's one.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::constants::{manifest_defaults, MANIFEST_FILE};
use crate::error::{Error, Result};

/// Entry-point fields carried over after `scripts` when the template has them.
pub const ENTRY_POINT_FIELDS: &[&str] = &["html", "fallback", "src", "assets", "favicon"];

/// The parts of the template manifest the new project inherits.
///
/// Maps keep the template's key order.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub repository: Option<Value>,
    pub main: Option<Value>,
    #[serde(default)]
    pub scripts: IndexMap<String, Value>,
    #[serde(default)]
    pub dependencies: IndexMap<String, Value>,
    #[serde(default)]
    pub dev_dependencies: IndexMap<String, Value>,
    #[serde(default)]
    pub engines: IndexMap<String, Value>,
    #[serde(flatten)]
    pub other: IndexMap<String, Value>,
}

impl TemplateManifest {
    /// Reads `package.json` from the template root.
    pub fn load<P: AsRef<Path>>(template_root: P) -> Result<Self> {
        let path = template_root.as_ref().join(MANIFEST_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return Err(Error::ManifestRead { path, source }),
        };
        serde_json::from_str(&content).map_err(|source| Error::ManifestParse { path, source })
    }

    /// Repository URL, whether given as a string or as `{ "url": ... }`.
    pub fn repository_url(&self) -> Option<&str> {
        match self.repository.as_ref()? {
            Value::String(url) => Some(url),
            Value::Object(repository) => repository.get("url").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Renders the manifest of a new project called `project_name`.
    ///
    /// Name, version, license and the descriptive fields are replaced; scripts,
    /// dependencies, devDependencies, engines and entry points are carried over
    /// in the template's order, one map entry per line.
    pub fn render(&self, project_name: &str) -> String {
        let mut fields: Vec<(&str, String)> = vec![
            ("name", json_string(project_name)),
            ("version", json_string(manifest_defaults::VERSION)),
            ("description", json_string("")),
            ("author", json_string("")),
            ("license", json_string(manifest_defaults::LICENSE)),
            ("keywords", "[]".to_string()),
        ];

        if let Some(main) = &self.main {
            fields.push(("main", main.to_string()));
        }
        fields.push(("scripts", render_map(&self.scripts)));

        for key in ENTRY_POINT_FIELDS {
            if let Some(value) = self.other.get(*key) {
                fields.push((*key, value.to_string()));
            }
        }

        fields.push(("dependencies", render_map(&self.dependencies)));
        fields.push(("devDependencies", render_map(&self.dev_dependencies)));
        fields.push(("engines", render_map(&self.engines)));

        let body: Vec<String> = fields
            .into_iter()
            .map(|(key, value)| format!("  {}: {}", json_string(key), value))
            .collect();

        format!("{{\n{}\n}}\n", body.join(",\n"))
    }
}

/// Writes the rendered manifest into the project, replacing any existing one.
pub fn write_manifest<P: AsRef<Path>>(project_dir: P, content: &str) -> Result<PathBuf> {
    let path = project_dir.as_ref().join(MANIFEST_FILE);
    std::fs::write(&path, content)
        .map_err(|source| Error::ManifestWrite { path: path.clone(), source })?;
    Ok(path)
}

fn json_string(value: &str) -> String {
    Value::String(value.to_string()).to_string()
}

/// Renders a map with one entry per line; values keep their compact encoding.
fn render_map(map: &IndexMap<String, Value>) -> String {
    if map.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = map
        .iter()
        .map(|(key, value)| format!("{}:{}", json_string(key), value))
        .collect();
    format!("{{\n    {}\n  }}", entries.join(",\n    "))
}
