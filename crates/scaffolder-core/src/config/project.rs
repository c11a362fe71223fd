//! Project configuration and name validation

use super::package_manager::PackageManager;
use thiserror::Error;

/// Why a candidate project name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name is required")]
    EmptyName,

    #[error("Project name may only contain lowercase letters, numbers, hyphens and underscores")]
    InvalidCharacters,
}

/// Fully validated answers for a single scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Directory name and the generated manifest's `name`
    pub project_name: String,

    /// Package manager used for installing and shown in next steps
    pub package_manager: PackageManager,

    /// Whether to run the install command after generation
    pub install_deps: bool,
}

impl ProjectConfig {
    /// Build a config, validating the project name
    pub fn new(
        project_name: &str,
        package_manager: PackageManager,
        install_deps: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            project_name: validate_project_name(project_name)?,
            package_manager,
            install_deps,
        })
    }
}

/// Check a candidate project name against `[a-z0-9-_]+`
///
/// The name is returned unchanged on success. No trimming or case folding is
/// applied, callers decide whether to normalize input first.
pub fn validate_project_name(candidate: &str) -> Result<String, ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let valid = candidate
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

    if !valid {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(candidate.to_string())
}
