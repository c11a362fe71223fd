//! The generation pipeline
//!
//! Collecting config → checking the destination → materializing →
//! installing (optional) → done. Cancellation and a destination conflict are
//! the only early exits; both happen before anything is written.

use crate::collector::{collect_config, CreateArgs, Prompter};
use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::runtime::{check_package_manager, install_dependencies, InstallOutcome, ProcessRunner};
use crate::templates::{materialize, CATALOG};
use std::io;
use std::path::{Path, PathBuf};

/// Progress and result output for a run
pub trait Reporter {
    fn info(&mut self, message: &str) -> io::Result<()>;
    fn success(&mut self, message: &str) -> io::Result<()>;
    fn warning(&mut self, message: &str) -> io::Result<()>;

    /// Show that a long-running step started
    fn start_progress(&mut self, message: &str);

    /// Finish the current long-running step
    fn stop_progress(&mut self, message: &str);

    /// Final success output
    fn summary(&mut self, summary: &Summary) -> io::Result<()>;
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct Summary {
    pub config: ProjectConfig,
    pub project_dir: PathBuf,
    pub files: Vec<String>,
    /// `None` when installation was skipped
    pub install: Option<InstallOutcome>,
    pub next_steps: Vec<String>,
}

/// The absolute directory new projects are created in
pub fn working_directory() -> Result<PathBuf, ScaffoldError> {
    std::env::current_dir().map_err(ScaffoldError::WorkingDirectory)
}

/// Run the whole pipeline, creating the project under `cwd`
pub async fn run_pipeline<C, U, R>(
    product: &C,
    args: &CreateArgs,
    cwd: &Path,
    ui: &mut U,
    runner: &R,
) -> Result<Summary, ScaffoldError>
where
    C: ProductConfig,
    U: Prompter + Reporter,
    R: ProcessRunner,
{
    let config = collect_config(args, &product.default_project_name(), ui)?;

    let project_dir = cwd.join(&config.project_name);
    if project_dir.exists() {
        return Err(ScaffoldError::DestinationExists(project_dir));
    }

    ui.start_progress("Creating project...");
    let files = match materialize(&project_dir, CATALOG, &config).await {
        Ok(files) => files,
        Err(e) => {
            ui.stop_progress("Failed to create project");
            return Err(e.into());
        }
    };
    ui.stop_progress(&format!(
        "Created {} files in {}",
        files.len(),
        project_dir.display()
    ));

    let install = if config.install_deps {
        Some(install_step(&config, &project_dir, ui, runner).await?)
    } else {
        None
    };

    let installed = install.as_ref().is_some_and(InstallOutcome::is_success);
    let summary = Summary {
        next_steps: product.next_steps(&config, installed),
        config,
        project_dir,
        files,
        install,
    };

    ui.summary(&summary).map_err(ScaffoldError::Terminal)?;

    Ok(summary)
}

/// Install dependencies; failures are downgraded to a warning
async fn install_step<U: Reporter, R: ProcessRunner>(
    config: &ProjectConfig,
    project_dir: &Path,
    ui: &mut U,
    runner: &R,
) -> Result<InstallOutcome, ScaffoldError> {
    let pm = config.package_manager;
    let info = check_package_manager(runner, pm).await;

    let outcome = if info.available {
        ui.info(&format!(
            "Installing dependencies with {} ({})",
            info.name,
            info.version.as_deref().unwrap_or("unknown")
        ))
        .map_err(ScaffoldError::Terminal)?;
        install_dependencies(runner, pm, project_dir).await
    } else {
        InstallOutcome::Failed(format!("{} was not found on your PATH", pm))
    };

    let reported = match &outcome {
        InstallOutcome::Success => ui.success("Dependencies installed"),
        InstallOutcome::Failed(cause) => ui.warning(&format!(
            "Could not install dependencies: {}\nRun `{}` inside {} to install them manually.",
            cause,
            pm.install_command(),
            config.project_name
        )),
    };
    reported.map_err(ScaffoldError::Terminal)?;

    Ok(outcome)
}
