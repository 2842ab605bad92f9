//! Integration tests for the archive bundler library API.

use lumen_build_tools::bundler::{BundleRequest, Error, bundle};
use std::fs;
use std::path::PathBuf;

#[tokio::test]
async fn test_unsupported_extension_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "hello").unwrap();
    let target = dir.path().join("out.rar");

    let err = bundle(&BundleRequest::new([target.clone()], [source]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
    assert!(!target.exists());
}

#[tokio::test]
async fn test_empty_sources_produce_valid_empty_archives() {
    let dir = tempfile::tempdir().unwrap();
    let zip_target = dir.path().join("out.zip");
    let tar_target = dir.path().join("out.tar.gz");

    let request = BundleRequest::new(
        [zip_target.clone(), tar_target.clone()],
        Vec::<PathBuf>::new(),
    );
    let written = bundle(&request).await.unwrap();
    assert_eq!(written, vec![zip_target.clone(), tar_target.clone()]);

    let zip = zip::ZipArchive::new(fs::File::open(&zip_target).unwrap()).unwrap();
    assert_eq!(zip.len(), 0);

    let tar_gz = fs::File::open(&tar_target).unwrap();
    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(tar_gz));
    assert_eq!(archive.entries().unwrap().count(), 0);
}

#[tokio::test]
async fn test_earlier_targets_survive_later_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("out.zip");
    let bad = dir.path().join("out.rar");

    let request = BundleRequest::new([good.clone(), bad.clone()], Vec::<PathBuf>::new());
    let err = bundle(&request).await.unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));

    // No rollback across targets: the archive completed before the failing
    // target stays on disk, the failing one never appears.
    assert!(good.exists());
    assert!(!bad.exists());
}

#[tokio::test]
async fn test_missing_source_aborts_without_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.tar.gz");
    let missing = dir.path().join("nope.txt");

    let err = bundle(&BundleRequest::new([target.clone()], [missing]))
        .await
        .unwrap_err();
    match err {
        Error::Context(_, inner) => assert!(matches!(*inner, Error::Fs { .. })),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!target.exists());
}

#[tokio::test]
async fn test_zip_entry_names_are_prefix_plus_source_path() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("a.txt");
    fs::write(&source, "hello").unwrap();
    let target = dir.path().join("out.zip");

    // Entry names are plain concatenation; nothing rewrites the source
    // path, so an absolute source shows up absolute. Callers pick the
    // prefix and source shape to control archive layout.
    let request = BundleRequest::new([target.clone()], [source.clone()]).with_prefix("pkg/");
    bundle(&request).await.unwrap();

    let mut zip = zip::ZipArchive::new(fs::File::open(&target).unwrap()).unwrap();
    assert_eq!(zip.len(), 1);
    let entry = zip.by_index(0).unwrap();
    assert_eq!(entry.name(), format!("pkg/{}", source.display()));
}
