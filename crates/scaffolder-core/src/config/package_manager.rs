//! Supported package managers and their install commands

use clap::ValueEnum;
use std::fmt;

/// Package managers a generated project can be installed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// All package managers in prompt order; the first is the default
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Binary name, also used as the display label
    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments passed to the binary to install dependencies
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["install"],
            PackageManager::Pnpm => &["install"],
            PackageManager::Yarn => &[],
            PackageManager::Bun => &["install"],
        }
    }

    /// Full install command as the user would type it
    pub fn install_command(&self) -> String {
        std::iter::once(self.name())
            .chain(self.install_args().iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Command that runs a package.json script
    pub fn run_command(&self, script: &str) -> String {
        format!("{} run {}", self.name(), script)
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
