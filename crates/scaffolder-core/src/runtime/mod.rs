//! External processes: package manager detection and dependency installation
//!
//! This module provides:
//! - The `ProcessRunner` seam used for every spawned process
//! - Package manager availability checks
//! - Running the install command in a generated project

pub mod check;
pub mod installer;

pub use check::{check_package_manager, RuntimeInfo};
pub use installer::{install_dependencies, InstallOutcome, ProcessRunner, SystemRunner};
