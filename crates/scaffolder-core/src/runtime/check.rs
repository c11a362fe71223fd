//! Package manager detection

use crate::config::PackageManager;
use crate::runtime::installer::ProcessRunner;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether a package manager is on PATH by asking for its version
pub async fn check_package_manager<R: ProcessRunner>(
    runner: &R,
    package_manager: PackageManager,
) -> RuntimeInfo {
    match runner.capture(package_manager.name(), &["--version"]).await {
        Ok(Some(version)) => RuntimeInfo {
            name: package_manager.name(),
            version: Some(version).filter(|v| !v.is_empty()),
            available: true,
        },
        _ => RuntimeInfo {
            name: package_manager.name(),
            version: None,
            available: false,
        },
    }
}
