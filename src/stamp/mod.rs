//! License header stamping for Java sources.
//!
//! Rewrites each file as `header + everything from its package statement
//! onward`, with Unix line endings. Because the whole preamble is replaced,
//! stamping is idempotent: re-running it over already-stamped files leaves
//! them unchanged. Files without a package statement are reported and
//! skipped; the run continues.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Outcome of a stamping run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StampSummary {
    /// Files rewritten with the header
    pub stamped: usize,
    /// Files skipped because no package statement was found
    pub skipped: usize,
}

/// Stamp the given header onto each Java source file.
///
/// The header is written verbatim (a trailing newline is added if missing)
/// followed by the file's content from its `package` line onward. Line
/// endings are normalized to `\n`.
pub async fn stamp_files(header: &str, paths: &[PathBuf]) -> Result<StampSummary> {
    let mut header = header.to_owned();
    if !header.ends_with('\n') {
        header.push('\n');
    }

    let mut summary = StampSummary::default();

    for path in paths {
        if stamp_file(&header, path).await? {
            summary.stamped += 1;
        } else {
            log::error!("found no package statement in {}", path.display());
            summary.skipped += 1;
        }
    }

    Ok(summary)
}

/// Stamp one file. Returns false when the file has no package statement.
async fn stamp_file(header: &str, path: &Path) -> Result<bool> {
    let content = tokio::fs::read_to_string(path).await?;

    let Some(body) = body_from_package(&content) else {
        return Ok(false);
    };

    let mut stamped = String::with_capacity(header.len() + body.len());
    stamped.push_str(header);
    for line in body.lines() {
        stamped.push_str(line);
        stamped.push('\n');
    }

    if stamped != content {
        tokio::fs::write(path, stamped).await?;
    }

    Ok(true)
}

/// Slice of `content` starting at the first line that begins with
/// `package `.
fn body_from_package(content: &str) -> Option<&str> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with("package ") {
            return Some(&content[offset..]);
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "/*\n * Copyright (C) 2007 The Lumen Project\n */\n";

    fn write_source(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_header_replaces_preamble() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            &dir,
            "Main.java",
            "// stale comment\npackage org.lumen;\n\nclass Main {}\n",
        );

        let summary = stamp_files(HEADER, &[path.clone()]).await.unwrap();
        assert_eq!(summary.stamped, 1);
        assert_eq!(summary.skipped, 0);

        let stamped = fs::read_to_string(&path).unwrap();
        assert_eq!(
            stamped,
            format!("{HEADER}package org.lumen;\n\nclass Main {{}}\n")
        );
    }

    #[tokio::test]
    async fn test_stamping_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Tool.java", "package org.lumen.tools;\nclass Tool {}\n");

        stamp_files(HEADER, &[path.clone()]).await.unwrap();
        let first = fs::read_to_string(&path).unwrap();

        stamp_files(HEADER, &[path.clone()]).await.unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_file_without_package_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let no_package = write_source(&dir, "Broken.java", "class Broken {}\n");
        let ok = write_source(&dir, "Fine.java", "package org.lumen;\nclass Fine {}\n");

        let summary = stamp_files(HEADER, &[no_package.clone(), ok.clone()])
            .await
            .unwrap();
        assert_eq!(summary.stamped, 1);
        assert_eq!(summary.skipped, 1);

        // Skipped file untouched, later file still processed
        assert_eq!(fs::read_to_string(&no_package).unwrap(), "class Broken {}\n");
        assert!(fs::read_to_string(&ok).unwrap().starts_with(HEADER));
    }

    #[tokio::test]
    async fn test_crlf_endings_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(&dir, "Win.java", "package org.lumen;\r\nclass Win {}\r\n");

        stamp_files(HEADER, &[path.clone()]).await.unwrap();
        let stamped = fs::read_to_string(&path).unwrap();
        assert!(!stamped.contains('\r'));
        assert!(stamped.ends_with("class Win {}\n"));
    }
}
