//! Charm-style CLI prompts using cliclack

use crate::collector::{CreateArgs, Prompter};
use crate::config::{validate_project_name, PackageManager, ValidationError};
use crate::error::ScaffoldError;
use crate::pipeline::{run_pipeline, working_directory, Reporter, Summary};
use crate::product::ProductConfig;
use crate::runtime::SystemRunner;
use colored::Colorize;
use std::error::Error as _;
use std::io;

/// Prompts and progress output rendered with cliclack
pub struct ClackUi {
    docs_url: &'static str,
    spinner: Option<cliclack::ProgressBar>,
}

impl ClackUi {
    pub fn new(docs_url: &'static str) -> Self {
        Self {
            docs_url,
            spinner: None,
        }
    }
}

impl Prompter for ClackUi {
    fn project_name(&mut self, default: &str) -> io::Result<String> {
        cliclack::input("Project name")
            .placeholder(default)
            .default_input(default)
            .validate(|input: &String| validate_project_name(input).map(|_| ()))
            .interact()
    }

    fn package_manager(&mut self, default: PackageManager) -> io::Result<PackageManager> {
        let mut select = cliclack::select("Which package manager do you want to use?");
        for pm in PackageManager::ALL {
            select = select.item(pm, pm.name(), pm.install_command());
        }

        select.initial_value(default).interact()
    }

    fn install_deps(&mut self, package_manager: PackageManager) -> io::Result<bool> {
        cliclack::confirm(format!(
            "Install dependencies now with {}?",
            package_manager
        ))
        .initial_value(true)
        .interact()
    }

    fn invalid_name(&mut self, name: &str, error: &ValidationError) -> io::Result<()> {
        cliclack::log::error(format!("'{}': {}", name, error))
    }
}

impl Reporter for ClackUi {
    fn info(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::info(message)
    }

    fn success(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::success(message)
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        cliclack::log::warning(message)
    }

    fn start_progress(&mut self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
    }

    fn stop_progress(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        }
    }

    fn summary(&mut self, summary: &Summary) -> io::Result<()> {
        cliclack::log::success(format!(
            "Project {} is ready",
            summary.config.project_name.bold()
        ))?;

        println!();
        println!("  {}", "Next steps".bold());
        println!();

        for (i, step) in summary.next_steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step.cyan());
        }

        println!();
        cliclack::outro(format!("Happy coding! Docs: {}", self.docs_url))
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<Summary, ScaffoldError> {
    cliclack::intro(config.display_name()).map_err(ScaffoldError::Terminal)?;

    let cwd = working_directory()?;
    let mut ui = ClackUi::new(config.docs_url());

    run_pipeline(config, &args, &cwd, &mut ui, &SystemRunner).await
}

/// Print a fatal error the way the rest of the session looks
pub fn report_error(err: &ScaffoldError) {
    if let ScaffoldError::Cancelled = err {
        let _ = cliclack::outro_cancel("Operation cancelled.");
        return;
    }

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }

    let _ = cliclack::log::error(message);
    let _ = cliclack::outro_cancel("Project was not created.");
}
