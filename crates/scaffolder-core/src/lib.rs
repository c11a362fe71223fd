//! Scaffolder Core - Shared library for the taujs project generator
//!
//! This library turns three answers (project name, package manager, install
//! preference) into a runnable taujs application on disk, then optionally
//! installs its dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name validation, the template catalog, materialization, dependency installation
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `run_pipeline`, generic over prompts, output and process spawning
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{materialize, PackageManager, ProjectConfig, CATALOG};
//!
//! let config = ProjectConfig::new("demo-app", PackageManager::Pnpm, false)?;
//! let written = materialize(Path::new("demo-app"), CATALOG, &config).await?;
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use collector::{collect_config, CreateArgs, Prompter};
pub use config::{validate_project_name, PackageManager, ProjectConfig, ValidationError};
pub use error::ScaffoldError;
pub use pipeline::{run_pipeline, Reporter, Summary};
pub use product::ProductConfig;
pub use runtime::{install_dependencies, InstallOutcome, ProcessRunner, SystemRunner};
pub use templates::{materialize, MaterializeError, Template, CATALOG};

#[cfg(feature = "tui")]
pub use tui::run;
