use crate::{
    cli::{context::ProjectContext, Args},
    command::run_command,
    constants::IGNORE_FILE_TARGET,
    copier::{CopyExecutor, CopyPlan, CopyPlanner, CopyReport},
    error::{Error, Result},
    ioutils::{copy_file, create_project_dir},
    manifest::write_manifest,
    report::{self, project_label, Tone},
};
use chrono::Datelike;

/// Main CLI runner that orchestrates the scaffolding pipeline
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete scaffolding pipeline
    ///
    /// Every stage reports its own failure in detail before the error is
    /// returned; callers only need to signal the overall failure.
    pub fn run(self) -> Result<()> {
        if self.args.no_color {
            report::disable_colors();
        }

        let context = ProjectContext::resolve(&self.args).inspect_err(|e| {
            report::error(e.to_string(), Tone::Error);
        })?;
        let label = project_label(context.project_name());

        report::message(
            format!(
                "Initializing project {} at {}...",
                label,
                context.base_dir().display()
            ),
            Tone::Plain,
        );

        let plan = self.plan_copy(&context)?;

        if self.args.dry_run {
            return self.preview(&context, &plan);
        }

        self.create_project_dir(&context, &label)?;
        self.run_package_init(&context)?;
        self.copy_template_files(&context, &plan)?;
        self.rewrite_manifest(&context, &label)?;
        self.init_version_control(&context, &label)?;

        self.print_banner(&context);
        Ok(())
    }

    /// Plans the template mirror before anything is written
    fn plan_copy(&self, context: &ProjectContext) -> Result<CopyPlan> {
        CopyPlanner::new(
            &context.config().skip_rules,
            context.template_root(),
            context.project_dir(),
        )
        .plan()
        .inspect_err(|e| report::error(e.to_string(), Tone::Error))
    }

    /// Prints what a real run would do
    fn preview(&self, context: &ProjectContext, plan: &CopyPlan) -> Result<()> {
        if context.project_dir().exists() {
            let err = Error::ProjectDirectoryExists { path: context.project_dir().clone() };
            report::error(err.to_string(), Tone::Warning);
            return Err(err);
        }

        let config = context.config();
        report::message(
            format!("[DRY RUN] Creating directory '{}'", context.project_dir().display()),
            Tone::Plain,
        );
        report::message(format!("[DRY RUN] Running '{}'", config.package_init), Tone::Plain);
        for operation in &plan.operations {
            report::message(operation.get_message(true), Tone::Plain);
        }
        report::message("[DRY RUN] Rewriting package.json", Tone::Plain);
        report::message(format!("[DRY RUN] Running '{}'", config.vcs_init), Tone::Plain);
        report::message(
            format!(
                "[DRY RUN] Copying '{}' to '{}'",
                context.ignore_file_source().display(),
                context.project_dir().join(IGNORE_FILE_TARGET).display()
            ),
            Tone::Plain,
        );
        report::message("Dry run complete. Nothing was written.", Tone::Success);
        Ok(())
    }

    /// Creates the new project directory
    fn create_project_dir(&self, context: &ProjectContext, label: &str) -> Result<()> {
        match create_project_dir(context.project_dir()) {
            Ok(()) => {
                report::message(format!("Successfully created {label}"), Tone::Info);
                report::message(format!("at {}\n", context.base_dir().display()), Tone::Info);
                Ok(())
            }
            Err(e) => {
                match &e {
                    Error::ProjectDirectoryExists { .. } => report::error(
                        format!("{label} already exists.\nPlease choose a different name."),
                        Tone::Warning,
                    ),
                    _ => report::error(e.to_string(), Tone::Error),
                }
                Err(e)
            }
        }
    }

    /// Runs the package-manager initializer inside the project
    fn run_package_init(&self, context: &ProjectContext) -> Result<()> {
        let command = &context.config().package_init;
        report::message(format!("Running {command}..."), Tone::Plain);

        match run_command(command, context.project_dir()) {
            Ok(_) => {
                report::message(format!("{command} success!\n"), Tone::Info);
                Ok(())
            }
            Err(e) => {
                report::error(e.to_string(), Tone::Error);
                report::error(
                    format!(
                        "{command} failed.\n Please make sure the package manager is installed.\n"
                    ),
                    Tone::Error,
                );
                Err(e)
            }
        }
    }

    /// Mirrors the template files and applies the partial-failure policy
    fn copy_template_files(&self, context: &ProjectContext, plan: &CopyPlan) -> Result<()> {
        report::message(
            format!("Copying project files from {}...", context.template_label()),
            Tone::Plain,
        );

        let copy_report = CopyExecutor::new(self.args.jobs)
            .execute(plan)
            .inspect_err(|e| report::error(e.to_string(), Tone::Error))?;
        log::info!(
            "Created {} directories, copied {} files, skipped {} entries",
            copy_report.directories,
            copy_report.copied(),
            copy_report.skipped
        );

        self.check_copy_report(copy_report)?;
        report::message("Successfully created initial project files.\n", Tone::Info);
        Ok(())
    }

    /// Reports every failed file, then aborts unless partial copies are allowed
    fn check_copy_report(&self, copy_report: CopyReport) -> Result<()> {
        for failure in copy_report.failures() {
            if let Err(e) = &failure.result {
                report::error(
                    format!("Could not copy '{}': {}", failure.source.display(), e),
                    Tone::Error,
                );
            }
        }

        match copy_report.into_result() {
            Ok(_) => Ok(()),
            Err(e) if self.args.allow_partial => {
                report::error(format!("{e} Continuing because of --allow-partial."), Tone::Warning);
                Ok(())
            }
            Err(e) => {
                report::error(e.to_string(), Tone::Error);
                Err(e)
            }
        }
    }

    /// Overwrites the package-manager's manifest with one derived from the template
    fn rewrite_manifest(&self, context: &ProjectContext, label: &str) -> Result<()> {
        report::message(format!("Rewriting package.json for {label}..."), Tone::Plain);

        let content = context.manifest().render(context.project_name());
        match write_manifest(context.project_dir(), &content) {
            Ok(path) => {
                report::message(
                    format!("Wrote to {}:\n{}", path.display(), content.trim_end()),
                    Tone::Info,
                );
                report::message("package.json rewrite success!", Tone::Info);
                Ok(())
            }
            Err(e) => {
                log::error!("{e:?}");
                report::error(e.to_string(), Tone::Warning);
                report::error("package.json overwrite failed.", Tone::Error);
                Err(e)
            }
        }
    }

    /// Runs the version-control initializer and installs the ignore-file
    fn init_version_control(&self, context: &ProjectContext, label: &str) -> Result<()> {
        let command = &context.config().vcs_init;
        report::message(format!("Initializing version control for {label}..."), Tone::Plain);

        let result = run_command(command, context.project_dir())
            .map(|_| ())
            .and_then(|()| self.install_ignore_file(context));

        match result {
            Ok(()) => {
                report::message(format!("{command} success!\n"), Tone::Info);
                Ok(())
            }
            Err(e) => {
                report::error(e.to_string(), Tone::Error);
                Err(e)
            }
        }
    }

    fn install_ignore_file(&self, context: &ProjectContext) -> Result<()> {
        let source = context.ignore_file_source();
        if !source.is_file() {
            report::message(
                format!("No ignore-file at {}, skipping {}.", source.display(), IGNORE_FILE_TARGET),
                Tone::Warning,
            );
            return Ok(());
        }

        let target = context.project_dir().join(IGNORE_FILE_TARGET);
        copy_file(&source, &target)?;
        log::info!("Copied '{}' to '{}'", source.display(), target.display());
        Ok(())
    }

    fn print_banner(&self, context: &ProjectContext) {
        let manifest = context.manifest();

        report::message("Installation Success.\n", Tone::Success);
        if let Some(url) = manifest.repository_url() {
            report::message(
                format!("Please refer to README.md at {url} on how to get started.\n"),
                Tone::Success,
            );
        }
        if let Some(name) = &manifest.name {
            let version = manifest.version.as_deref().unwrap_or("0.0.0");
            report::message(format!("{name} v{version}"), Tone::Muted);
        }
        if let Some(license) = &manifest.license {
            report::message(format!("{license} License"), Tone::Muted);
        }
        if let Some(author) = manifest.other.get("author").and_then(|a| a.as_str()) {
            let year = chrono::Local::now().year();
            report::message(format!("Copyright (c) {year} {author}\n"), Tone::Muted);
        }
        report::message("Happy Coding :)", Tone::Highlight);
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
