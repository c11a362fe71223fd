//! Collecting the project configuration from arguments and prompts
//!
//! Every field is resolved independently: a value given on the command line
//! wins and its prompt is never shown; `--yes` takes the default; otherwise the
//! user is asked.

use crate::config::{validate_project_name, PackageManager, ProjectConfig, ValidationError};
use crate::error::ScaffoldError;
use std::io;

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (first positional argument)
    pub project_name: Option<String>,

    /// Package manager to install with
    pub package_manager: Option<PackageManager>,

    /// Whether to install dependencies; `None` asks
    pub install: Option<bool>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Source of interactive answers
///
/// Implementations return `io::ErrorKind::Interrupted` when the user aborts.
pub trait Prompter {
    /// Ask for the project name, suggesting `default`
    fn project_name(&mut self, default: &str) -> io::Result<String>;

    /// Ask which package manager to use
    fn package_manager(&mut self, default: PackageManager) -> io::Result<PackageManager>;

    /// Ask whether to install dependencies now
    fn install_deps(&mut self, package_manager: PackageManager) -> io::Result<bool>;

    /// Tell the user why a typed name was rejected before asking again
    fn invalid_name(&mut self, name: &str, error: &ValidationError) -> io::Result<()>;
}

/// Resolve a complete, validated `ProjectConfig`
pub fn collect_config<P: Prompter>(
    args: &CreateArgs,
    default_name: &str,
    prompter: &mut P,
) -> Result<ProjectConfig, ScaffoldError> {
    let project_name = match &args.project_name {
        Some(name) => validate_fatal(name)?,
        None if args.yes => validate_fatal(default_name)?,
        None => prompt_project_name(prompter, default_name)?,
    };

    let package_manager = match args.package_manager {
        Some(pm) => pm,
        None if args.yes => PackageManager::default(),
        None => prompter
            .package_manager(PackageManager::default())
            .map_err(ScaffoldError::from_prompt)?,
    };

    let install_deps = match args.install {
        Some(install) => install,
        None if args.yes => true,
        None => prompter
            .install_deps(package_manager)
            .map_err(ScaffoldError::from_prompt)?,
    };

    Ok(ProjectConfig {
        project_name,
        package_manager,
        install_deps,
    })
}

/// A name that never went through a prompt has no chance to be retyped
fn validate_fatal(name: &str) -> Result<String, ScaffoldError> {
    validate_project_name(name).map_err(|source| ScaffoldError::InvalidProjectName {
        name: name.to_string(),
        source,
    })
}

fn prompt_project_name<P: Prompter>(
    prompter: &mut P,
    default_name: &str,
) -> Result<String, ScaffoldError> {
    loop {
        let answer = prompter
            .project_name(default_name)
            .map_err(ScaffoldError::from_prompt)?;

        match validate_project_name(&answer) {
            Ok(name) => return Ok(name),
            Err(e) => prompter
                .invalid_name(&answer, &e)
                .map_err(ScaffoldError::from_prompt)?,
        }
    }
}
