//! Archive format classification.
//!
//! The target path's suffix alone decides the archive format. Classification
//! checks the longest suffixes first so that `.tar.gz` and `.tar.bz2` are
//! never mistaken for bare `.gz`/`.bz2` files, which are not supported.

use crate::bundler::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Archive formats the bundler can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    /// Deflate-compressed ZIP archive (`.zip`)
    Zip,
    /// Gzip-compressed tar archive (`.tar.gz`)
    TarGz,
    /// Bzip2-compressed tar archive (`.tar.bz2`)
    TarBz2,
}

impl ArchiveFormat {
    /// Classify a target path by its suffix.
    ///
    /// Returns [`Error::UnsupportedFormat`] when the path ends in none of
    /// the recognized suffixes. Purely a string check; the filesystem is
    /// not touched.
    pub fn from_target(path: &Path) -> Result<Self> {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => {
                return Err(Error::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        // Longest suffix first
        if name.ends_with(".tar.bz2") {
            Ok(Self::TarBz2)
        } else if name.ends_with(".tar.gz") {
            Ok(Self::TarGz)
        } else if name.ends_with(".zip") {
            Ok(Self::Zip)
        } else {
            Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }

    /// The file suffix associated with this format.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Zip => ".zip",
            Self::TarGz => ".tar.gz",
            Self::TarBz2 => ".tar.bz2",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zip => write!(f, "zip"),
            Self::TarGz => write!(f, "tar.gz"),
            Self::TarBz2 => write!(f, "tar.bz2"),
        }
    }
}
