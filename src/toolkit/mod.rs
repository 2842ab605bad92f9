//! GUI toolkit distribution fetcher.
//!
//! The Lumen GUI links against a platform-specific toolkit build published
//! as a zip on a release mirror. This module downloads the archive into a
//! working directory (skipped when already cached), optionally verifies its
//! SHA-256, and unpacks it next to the archive (skipped when the directory
//! already exists). Re-running is cheap and idempotent.
//!
//! Downloads are a single attempt; there is no retry policy.

use crate::error::{BuildToolsError, Result};
use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Identifies one toolkit build on the mirror.
///
/// The fields mirror the mirror's naming scheme: archives are published as
/// `{name}-{version}-{variant}-{platform}-{arch}.zip` under a
/// `R-{version}-{rev}` release directory.
#[derive(Debug, Clone)]
pub struct ToolkitSpec {
    /// Toolkit name (e.g. "swt")
    pub name: String,
    /// Release version (e.g. "3.5.1")
    pub version: String,
    /// Release revision timestamp (e.g. "200909170800")
    pub rev: String,
    /// Build variant
    pub variant: String,
    /// Target platform
    pub platform: String,
    /// Target architecture
    pub arch: String,
    /// Mirror base URL
    pub mirror: String,
    /// Expected SHA-256 of the archive, hex-encoded, if known
    pub sha256: Option<String>,
}

impl ToolkitSpec {
    /// Directory the distribution unpacks into.
    pub fn dir_name(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            self.name, self.version, self.variant, self.platform, self.arch
        )
    }

    /// File name of the distribution archive.
    pub fn archive_name(&self) -> String {
        format!("{}.zip", self.dir_name())
    }

    /// Full download URL on the mirror.
    pub fn url(&self) -> String {
        format!(
            "{}/R-{}-{}/{}",
            self.mirror.trim_end_matches('/'),
            self.version,
            self.rev,
            self.archive_name()
        )
    }
}

/// Fetch and unpack the toolkit distribution into `work_dir`.
///
/// Returns the directory containing the unpacked distribution.
pub async fn prepare(spec: &ToolkitSpec, work_dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(work_dir).await?;

    let archive_path = work_dir.join(spec.archive_name());
    if archive_path.exists() {
        log::debug!("using cached archive {}", archive_path.display());
    } else {
        let bytes = download(&spec.url()).await?;
        tokio::fs::write(&archive_path, &bytes).await?;
    }

    // Verify the archive even when cached; a truncated earlier download
    // would otherwise poison every later run.
    if let Some(expected) = &spec.sha256 {
        let actual = file_sha256(&archive_path).await?;
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(BuildToolsError::HashMismatch {
                expected: expected.clone(),
                actual,
            });
        }
    }

    let dest = work_dir.join(spec.dir_name());
    if dest.is_dir() {
        log::debug!("toolkit already unpacked at {}", dest.display());
    } else {
        extract_archive(archive_path, dest.clone()).await?;
    }

    Ok(dest)
}

/// Download a file from a URL into memory.
async fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("downloading {}", url);

    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;

    Ok(bytes.to_vec())
}

/// SHA-256 of a file, hex-encoded. Reads in 8KB chunks.
async fn file_sha256(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Unpack a zip archive into `dest`.
///
/// Entry names that would escape `dest` are rejected.
async fn extract_archive(archive: PathBuf, dest: PathBuf) -> Result<()> {
    log::info!("extracting {} to {}", archive.display(), dest.display());

    tokio::task::spawn_blocking(move || -> Result<()> {
        let file = std::fs::File::open(&archive)?;
        let mut zip = zip::ZipArchive::new(file)?;

        for index in 0..zip.len() {
            let mut entry = zip.by_index(index)?;
            let relative = entry.enclosed_name().ok_or_else(|| {
                anyhow::anyhow!("refusing to extract unsafe entry name {:?}", entry.name())
            })?;

            let out_path = dest.join(relative);
            if entry.is_dir() {
                std::fs::create_dir_all(&out_path)?;
            } else {
                if let Some(parent) = out_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let mut out = std::fs::File::create(&out_path)?;
                io::copy(&mut entry, &mut out)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| anyhow::anyhow!("join error: {e}"))?
}
