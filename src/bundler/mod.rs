//! Multi-format archive bundler.
//!
//! Packages build outputs into distribution archives. The target path's
//! suffix picks the format:
//!
//! | Suffix | Format |
//! |--------|-------------------------|
//! | `.zip` | deflate-compressed zip |
//! | `.tar.gz` | gzip-compressed tar |
//! | `.tar.bz2` | bzip2-compressed tar |
//!
//! Sources may be files or directories; directories contribute every file
//! beneath them. Entry names are `prefix + source path`, so a prefix of
//! `"lumen-1.2/"` relocates the whole bundle under a release directory
//! inside the archive.
//!
//! ```no_run
//! use lumen_build_tools::bundler::{BundleRequest, bundle};
//!
//! # async fn run() -> lumen_build_tools::bundler::Result<()> {
//! let request = BundleRequest::new(
//!     ["dist/lumen-1.2.zip", "dist/lumen-1.2.tar.gz"],
//!     ["lumen.jar", "docs"],
//! )
//! .with_prefix("lumen-1.2/");
//!
//! let artifacts = bundle(&request).await?;
//! # Ok(())
//! # }
//! ```

mod entries;
pub mod error;
mod format;
mod settings;
mod writer;

// Public re-exports
pub use entries::{ArchiveEntry, collect_entries};
pub use error::{Context, Error, ErrorExt, Result};
pub use format::ArchiveFormat;
pub use settings::BundleRequest;
pub use writer::bundle;
