//! External source-tree synchronization.
//!
//! The build compiles the imaging library from its upstream repository
//! rather than a vendored copy. This module clones that repository on first
//! use and fast-forwards it on later runs, then verifies a working copy is
//! actually present.

use crate::error::{BuildToolsError, Result};
use std::path::{Path, PathBuf};

/// Clone `url` into `dir`, or update `dir` if it already holds a clone.
///
/// Updates are fast-forward only; local divergence fails the sync rather
/// than silently merging. Returns the working copy path.
pub async fn sync_repository(url: &str, dir: &Path) -> Result<PathBuf> {
    let dir_str = dir.to_str().ok_or_else(|| {
        BuildToolsError::Cli(crate::error::CliError::InvalidArguments {
            reason: format!("directory path contains invalid UTF-8: {}", dir.display()),
        })
    })?;

    if dir.is_dir() {
        log::info!("updating {}", dir.display());
        run_git(&["-C", dir_str, "pull", "--ff-only"]).await?;
    } else {
        log::info!("cloning {}", url);
        run_git(&["clone", url, dir_str]).await?;
    }

    if !dir.join(".git").is_dir() {
        return Err(BuildToolsError::CommandFailed {
            command: "git".to_string(),
            reason: format!("no working copy at {} after sync", dir.display()),
        });
    }

    Ok(dir.to_path_buf())
}

/// Run git with the given arguments, surfacing stderr on failure.
async fn run_git(args: &[&str]) -> Result<()> {
    let output = tokio::process::Command::new("git")
        .args(args)
        .output()
        .await?;

    if !output.status.success() {
        return Err(BuildToolsError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sync_fails_when_directory_is_not_a_clone() {
        // An existing directory without .git triggers a pull, which git
        // rejects; the error carries the failing command.
        let dir = tempfile::tempdir().unwrap();
        let err = sync_repository("file:///nonexistent", dir.path())
            .await
            .unwrap_err();
        match err {
            BuildToolsError::CommandFailed { command, .. } => {
                assert!(command.starts_with("git"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_sync_clone_failure_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("lib");
        let err = sync_repository("file:///nonexistent-repo", &target)
            .await
            .unwrap_err();
        match err {
            BuildToolsError::CommandFailed { command, reason } => {
                assert!(command.contains("clone"));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
