//! `sync-source` subcommand: clone or update an external source tree.

use crate::cli::SyncSourceArgs;
use crate::error::Result;
use crate::source;

/// Bring the external working copy up to date.
pub async fn run(args: SyncSourceArgs) -> Result<i32> {
    let dir = source::sync_repository(&args.url, &args.dir).await?;
    log::info!("source tree ready at {}", dir.display());

    Ok(0)
}
