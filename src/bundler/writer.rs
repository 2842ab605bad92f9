//! Archive writers.
//!
//! Produces one archive per requested target, strictly sequentially. Every
//! format consumes the same flat entry list (see [`crate::bundler::entries`]);
//! only the container and compression differ. Archives are staged in a
//! temporary file next to the target and renamed into place on success, so a
//! failed target leaves nothing at its path. Targets already completed by
//! the same call are not rolled back.

use crate::bail;
use crate::bundler::{
    entries::{ArchiveEntry, collect_entries},
    error::{Context, Error, ErrorExt, Result},
    format::ArchiveFormat,
    settings::BundleRequest,
};
use bzip2::write::BzEncoder;
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    io::{self, Seek, Write},
    path::PathBuf,
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Produce every archive named by the request.
///
/// Targets are processed in order. Each target is classified by suffix
/// before anything is written for it, so an unrecognized suffix fails
/// without creating or modifying a file at that path. Any I/O failure while
/// reading a source or writing an archive aborts the current target and the
/// whole call.
///
/// Returns the paths of the archives written.
pub async fn bundle(request: &BundleRequest) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(request.targets().len());

    for target in request.targets() {
        let format = ArchiveFormat::from_target(target)?;
        log::info!("creating {} archive {}", format, target.display());

        write_archive(
            target.clone(),
            format,
            request.sources().to_vec(),
            request.prefix().to_string(),
        )
        .await?;

        written.push(target.clone());
    }

    Ok(written)
}

/// Enumerate entries and write one archive, staging through a temp file.
async fn write_archive(
    target: PathBuf,
    format: ArchiveFormat,
    sources: Vec<PathBuf>,
    prefix: String,
) -> Result<()> {
    let task = tokio::task::spawn_blocking(move || -> Result<()> {
        let entries = collect_entries(&sources, &prefix)
            .with_context(|| format!("collecting entries for {}", target.display()))?;

        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).fs_context("creating target directory", &parent)?;

        // Staged in the target's directory so the rename stays on one
        // filesystem and is atomic.
        let staging =
            tempfile::NamedTempFile::new_in(&parent).fs_context("creating staging file", &parent)?;

        match format {
            ArchiveFormat::Zip => write_zip(staging.as_file(), &entries)?,
            ArchiveFormat::TarGz => {
                let encoder = GzEncoder::new(staging.as_file(), Compression::default());
                let mut inner = write_tar(encoder, &entries)?.finish()?;
                inner.flush()?;
            }
            ArchiveFormat::TarBz2 => {
                let encoder = BzEncoder::new(staging.as_file(), bzip2::Compression::default());
                let mut inner = write_tar(encoder, &entries)?.finish()?;
                inner.flush()?;
            }
        }

        staging.persist(&target).map_err(|e| Error::Fs {
            context: "renaming archive into place",
            path: target.clone(),
            error: e.error,
        })?;

        Ok(())
    });

    match task.await {
        Ok(result) => result,
        Err(e) => bail!("archive task failed: {e}"),
    }
}

/// Write a deflate-compressed zip archive containing the given entries.
///
/// Entries are files only; directories are represented implicitly through
/// entry names.
fn write_zip<W: Write + Seek>(writer: W, entries: &[ArchiveEntry]) -> Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        zip.start_file(entry.name.as_str(), options)?;
        let mut source =
            File::open(&entry.source).fs_context("reading bundle source", &entry.source)?;
        io::copy(&mut source, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

/// Append the given entries to a tar stream and finish the archive.
///
/// Returns the underlying writer so compressed streams can be finished by
/// the caller.
fn write_tar<W: Write>(writer: W, entries: &[ArchiveEntry]) -> Result<W> {
    let mut tar = tar::Builder::new(writer);

    for entry in entries {
        tar.append_path_with_name(&entry.source, &entry.name)
            .fs_context("adding tar entry", &entry.source)?;
    }

    Ok(tar.into_inner()?)
}
