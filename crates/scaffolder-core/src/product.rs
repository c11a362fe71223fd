//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a scaffolding binary implements to brand
//! the prompts and decide what the user is told once the project exists.

use crate::config::ProjectConfig;

/// Configuration trait for a scaffolding CLI product
///
/// Each product defines:
/// - Product identity (name, display name)
/// - Default project name suggested at the prompt
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used in the default project name)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Project name suggested when none is given
    fn default_project_name(&self) -> String {
        format!("my-{}-app", self.name())
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project: &ProjectConfig, installed: bool) -> Vec<String> {
        let pm = project.package_manager;
        let mut steps = vec![format!("cd {}", project.project_name)];

        if !installed {
            steps.push(pm.install_command());
        }

        steps.push(pm.run_command("dev"));
        steps
    }
}
