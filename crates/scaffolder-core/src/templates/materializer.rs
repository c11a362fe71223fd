//! Writing the rendered catalog to disk
//!
//! Files are staged in a hidden sibling directory and renamed onto the target
//! once every write succeeded, so a failed run leaves nothing behind.

use crate::config::ProjectConfig;
use crate::templates::catalog::{Content, Template, DIRECTORIES};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Failure while creating a project on disk
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Directory {} already exists", .0.display())]
    DestinationExists(PathBuf),

    #[error("Parent directory does not exist: {}", .0.display())]
    MissingParent(PathBuf),

    #[error("Failed to create directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to render {path}")]
    Render {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to write file {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to move project into {}", path.display())]
    Persist { path: PathBuf, source: io::Error },
}

/// Create `target_root` and write every catalog entry into it
///
/// Returns the relative paths written, in catalog order.
pub async fn materialize(
    target_root: &Path,
    catalog: &[Template],
    config: &ProjectConfig,
) -> Result<Vec<String>, MaterializeError> {
    if target_root.exists() {
        return Err(MaterializeError::DestinationExists(target_root.to_path_buf()));
    }

    let parent = match target_root.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(MaterializeError::MissingParent(target_root.to_path_buf())),
    };
    if !parent.is_dir() {
        return Err(MaterializeError::MissingParent(parent.to_path_buf()));
    }

    let staging = tempfile::Builder::new()
        .prefix(&format!(".{}-", config.project_name))
        .tempdir_in(parent)
        .map_err(|source| MaterializeError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;

    // Staging dirs are created private; the project itself should not be
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staging.path(), std::fs::Permissions::from_mode(0o755))
            .await
            .map_err(|source| MaterializeError::CreateDir {
                path: staging.path().to_path_buf(),
                source,
            })?;
    }

    // Directory scaffolding completes before any file is written
    for dir in DIRECTORIES {
        let path = staging.path().join(dir);
        fs::create_dir_all(&path)
            .await
            .map_err(|source| MaterializeError::CreateDir { path, source })?;
    }

    let mut written = Vec::with_capacity(catalog.len());

    for template in catalog {
        let bytes = template
            .render(config)
            .and_then(Content::into_bytes)
            .map_err(|source| MaterializeError::Render {
                path: template.path.to_string(),
                source,
            })?;

        let target_path = staging.path().join(template.path);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| MaterializeError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&target_path, &bytes)
            .await
            .map_err(|source| MaterializeError::Write {
                path: target_root.join(template.path),
                source,
            })?;

        written.push(template.path.to_string());
    }

    // Something may have claimed the name while we were writing
    if target_root.exists() {
        return Err(MaterializeError::DestinationExists(target_root.to_path_buf()));
    }

    // On failure the staging guard removes the directory when dropped
    fs::rename(staging.path(), target_root)
        .await
        .map_err(|source| MaterializeError::Persist {
            path: target_root.to_path_buf(),
            source,
        })?;

    Ok(written)
}
