//! `fetch-toolkit` subcommand: download and unpack a GUI toolkit build.

use crate::cli::FetchToolkitArgs;
use crate::error::Result;
use crate::toolkit::{self, ToolkitSpec};

/// Fetch the toolkit distribution described by the arguments.
pub async fn run(args: FetchToolkitArgs) -> Result<i32> {
    let spec = ToolkitSpec {
        name: args.name,
        version: args.version,
        rev: args.rev,
        variant: args.variant,
        platform: args.platform,
        arch: args.arch,
        mirror: args.mirror,
        sha256: args.sha256,
    };

    let dest = toolkit::prepare(&spec, &args.work_dir).await?;
    log::info!("toolkit ready at {}", dest.display());

    Ok(0)
}
