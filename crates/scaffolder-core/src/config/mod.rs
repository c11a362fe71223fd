//! Project configuration: the validated answers that drive generation
//!
//! This module provides:
//! - `ProjectConfig`, built once per run and passed by value downstream
//! - Project name validation
//! - The supported package managers and their command table

pub mod package_manager;
pub mod project;

pub use package_manager::PackageManager;
pub use project::{validate_project_name, ProjectConfig, ValidationError};
