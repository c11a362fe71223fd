//! Dependency installation through the selected package manager
//!
//! The install command runs in the project directory with the terminal's
//! stdio, so the user sees the package manager's own progress output. A failed
//! install is reported but never aborts the run.

use crate::config::PackageManager;
use colored::Colorize;
use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Seam for spawning external processes
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `program` in `cwd` with inherited stdio and wait for it.
    ///
    /// Returns the exit code, or `None` if the process was killed by a signal.
    async fn run_inherited(&self, program: &str, args: &[&str], cwd: &Path)
        -> io::Result<Option<i32>>;

    /// Run `program` and capture its trimmed stdout; `None` on non-zero exit
    async fn capture(&self, program: &str, args: &[&str]) -> io::Result<Option<String>>;
}

/// Spawns real processes with tokio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Package managers ship as `.cmd` shims on Windows, which need a shell
    fn command(program: &str) -> TokioCommand {
        if cfg!(windows) {
            let mut cmd = TokioCommand::new("cmd");
            cmd.arg("/C").arg(program);
            cmd
        } else {
            TokioCommand::new(program)
        }
    }
}

impl ProcessRunner for SystemRunner {
    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> io::Result<Option<i32>> {
        let status = Self::command(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(status.code())
    }

    async fn capture(&self, program: &str, args: &[&str]) -> io::Result<Option<String>> {
        let output = Self::command(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await?;

        if output.status.success() {
            Ok(Some(String::from_utf8_lossy(&output.stdout).trim().to_string()))
        } else {
            Ok(None)
        }
    }
}

/// Result of running the install command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Success,
    /// Recoverable failure with a human-readable cause
    Failed(String),
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, InstallOutcome::Success)
    }
}

/// Run the package manager's install command in `working_dir`
pub async fn install_dependencies<R: ProcessRunner>(
    runner: &R,
    package_manager: PackageManager,
    working_dir: &Path,
) -> InstallOutcome {
    let cmd = package_manager.install_command();
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let result = runner
        .run_inherited(
            package_manager.name(),
            package_manager.install_args(),
            working_dir,
        )
        .await;
    println!();

    match result {
        Ok(Some(0)) => InstallOutcome::Success,
        Ok(Some(code)) => InstallOutcome::Failed(format!("`{}` exited with code {}", cmd, code)),
        Ok(None) => InstallOutcome::Failed(format!("`{}` was terminated by a signal", cmd)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => InstallOutcome::Failed(format!(
            "{} was not found on your PATH",
            package_manager
        )),
        Err(e) => InstallOutcome::Failed(format!("Failed to run `{}`: {}", cmd, e)),
    }
}
