//! `bundle` subcommand: package build outputs into distribution archives.

use crate::bundler::{self, BundleRequest};
use crate::cli::BundleArgs;
use crate::error::Result;

/// Produce every requested archive from the given sources.
pub async fn run(args: BundleArgs) -> Result<i32> {
    let request = BundleRequest::new(args.targets, args.sources).with_prefix(args.prefix);

    let artifacts = bundler::bundle(&request).await?;
    for artifact in &artifacts {
        log::info!("wrote {}", artifact.display());
    }

    Ok(0)
}
