//! `stamp` subcommand: prepend the license header to Java sources.

use crate::cli::StampArgs;
use crate::error::Result;
use crate::stamp;

/// Stamp the header file's content onto each given source.
///
/// Exits non-zero when any file had to be skipped for lacking a package
/// statement, so the orchestrator notices half-stamped trees.
pub async fn run(args: StampArgs) -> Result<i32> {
    let header = tokio::fs::read_to_string(&args.header).await?;

    let summary = stamp::stamp_files(&header, &args.files).await?;
    log::info!(
        "stamped {} files ({} skipped)",
        summary.stamped,
        summary.skipped
    );

    Ok(if summary.skipped > 0 { 1 } else { 0 })
}
