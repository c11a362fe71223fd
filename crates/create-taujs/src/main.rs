//! create-taujs - Project scaffolding for taujs applications

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::{install_terminal_guards, report_error, restore_cursor};
use scaffolder_core::{CreateArgs, PackageManager, ProductConfig, ScaffoldError};
use std::process::ExitCode;

/// taujs product configuration
#[derive(Clone)]
pub struct TaujsConfig;

impl ProductConfig for TaujsConfig {
    fn name(&self) -> &'static str {
        "taujs"
    }

    fn display_name(&self) -> &'static str {
        "create-taujs"
    }

    fn docs_url(&self) -> &'static str {
        "https://taujs.dev/docs"
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-taujs")]
#[command(about = "Create a new taujs application")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create (lowercase letters, digits, - and _)
    pub project_name: Option<String>,

    /// Package manager used to install dependencies
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Skip installing dependencies
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Accept defaults for anything not given (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            package_manager: args.package_manager,
            install: args.no_install.then_some(false),
            yes: args.yes,
        }
    }
}

fn main() -> ExitCode {
    install_terminal_guards();

    // Usage errors share the single failure code; help and version succeed
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ScaffoldError>() {
                Some(scaffold_err) => report_error(scaffold_err),
                None => eprintln!("{} {:#}", "Error:".red().bold(), err),
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;

    let config = TaujsConfig;
    let result = runtime.block_on(scaffolder_core::run(&config, args.into()));

    // Ensure cursor is visible on normal exit
    restore_cursor();

    result?;
    Ok(())
}
