use crate::{
    cli::Args,
    config::Config,
    error::{Error, Result},
    manifest::TemplateManifest,
};
use std::path::{Component, Path, PathBuf};

/// Everything a scaffolding run needs, resolved up front.
#[derive(Debug)]
pub struct ProjectContext {
    project_name: String,
    base_dir: PathBuf,
    project_dir: PathBuf,
    template_root: PathBuf,
    config: Config,
    manifest: TemplateManifest,
}

impl ProjectContext {
    /// Resolves paths, the template config and the template manifest.
    ///
    /// Nothing on disk is modified.
    pub fn resolve(args: &Args) -> Result<Self> {
        validate_project_name(&args.project_name)?;

        let base_dir = match &args.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let base_dir = std::fs::canonicalize(base_dir)?;
        let project_dir = base_dir.join(&args.project_name);

        let template_root = match &args.template {
            Some(dir) => dir.clone(),
            None => default_template_root()?,
        };
        if !template_root.is_dir() {
            return Err(Error::TemplateNotFound { template_dir: template_root });
        }
        let template_root = std::fs::canonicalize(template_root)?;
        log::debug!("Using template root {}", template_root.display());

        let mut config = Config::load_config(&template_root)?;
        if let Some(package_init) = &args.package_init {
            config.package_init = package_init.clone();
        }
        if let Some(vcs_init) = &args.vcs_init {
            config.vcs_init = vcs_init.clone();
        }

        let manifest = TemplateManifest::load(&template_root)?;

        Ok(Self {
            project_name: args.project_name.clone(),
            base_dir,
            project_dir,
            template_root,
            config,
            manifest,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn project_dir(&self) -> &PathBuf {
        &self.project_dir
    }

    pub fn template_root(&self) -> &PathBuf {
        &self.template_root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn manifest(&self) -> &TemplateManifest {
        &self.manifest
    }

    /// Where the template's ignore-file is read from.
    pub fn ignore_file_source(&self) -> PathBuf {
        self.template_root.join(&self.config.ignore_file)
    }

    /// Human readable origin of the template for status lines.
    pub fn template_label(&self) -> String {
        self.manifest
            .repository_url()
            .map(str::to_string)
            .unwrap_or_else(|| self.template_root.display().to_string())
    }
}

/// Accepts names that form exactly one plain path component.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("the name is empty"));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(invalid("the name must be a single directory name")),
    }
}

/// The directory above the one holding the executable, as in `<root>/bin/neta`.
fn default_template_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    match exe.parent().and_then(Path::parent) {
        Some(root) => Ok(root.to_path_buf()),
        None => Err(Error::TemplateNotFound { template_dir: exe.clone() }),
    }
}
