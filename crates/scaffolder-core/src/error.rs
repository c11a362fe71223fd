//! Errors that end a scaffolding run

use crate::config::ValidationError;
use crate::templates::MaterializeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of the generation pipeline
///
/// Validation errors at a prompt and install failures are handled where they
/// occur and never surface here.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user aborted an interactive prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// A project name given on the command line failed validation
    #[error("Invalid project name '{name}'")]
    InvalidProjectName {
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("Directory {} already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("Failed to create project")]
    Materialize(#[source] MaterializeError),

    #[error("Could not determine the current directory")]
    WorkingDirectory(#[source] io::Error),

    /// Reading input or writing output to the terminal failed
    #[error("Terminal interaction failed")]
    Terminal(#[source] io::Error),
}

impl ScaffoldError {
    /// Classify an error returned by a prompt; Esc and Ctrl-C arrive as `Interrupted`
    pub fn from_prompt(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::Cancelled
        } else {
            ScaffoldError::Terminal(err)
        }
    }
}

impl From<MaterializeError> for ScaffoldError {
    fn from(err: MaterializeError) -> Self {
        match err {
            MaterializeError::DestinationExists(path) => ScaffoldError::DestinationExists(path),
            other => ScaffoldError::Materialize(other),
        }
    }
}
