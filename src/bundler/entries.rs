//! Archive entry enumeration.
//!
//! Both the zip and tar writers consume the same flat entry list: every
//! regular file to pack, tagged with its final archive-relative name. A
//! file source contributes one entry; a directory source contributes one
//! entry per file beneath it.
//!
//! Entry names are `prefix + source path`, by plain string concatenation.
//! No path normalization is performed, so callers control the prefix (and
//! the shape of the source paths) to avoid leaking absolute paths into
//! archives.

use crate::bundler::error::{ErrorExt, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One file to be written into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the file on disk
    pub source: PathBuf,
    /// Name the content appears under inside the archive
    pub name: String,
}

/// Enumerate the archive entries for the given sources.
///
/// Sources keep their given order; a directory's files appear at the
/// directory's position, in sorted walk order. Directories themselves are
/// not recorded as entries and symlinks are not followed during the walk.
///
/// Fails if a source path does not exist or cannot be read.
pub fn collect_entries(sources: &[PathBuf], prefix: &str) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    for source in sources {
        let metadata = std::fs::metadata(source).fs_context("reading bundle source", source)?;

        if metadata.is_dir() {
            for walked in WalkDir::new(source).follow_links(false).sort_by_file_name() {
                let walked = walked?;
                if !walked.file_type().is_file() {
                    continue;
                }
                entries.push(ArchiveEntry {
                    name: entry_name(prefix, walked.path()),
                    source: walked.path().to_path_buf(),
                });
            }
        } else {
            entries.push(ArchiveEntry {
                name: entry_name(prefix, source),
                source: source.clone(),
            });
        }
    }

    Ok(entries)
}

fn entry_name(prefix: &str, path: &Path) -> String {
    format!("{}{}", prefix, path.to_string_lossy())
}
