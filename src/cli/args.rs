//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with one
//! subcommand per build step and cross-flag validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build automation tools for the Lumen photo editor
#[derive(Parser, Debug)]
#[command(
    name = "lumen_build",
    version,
    about = "Build automation tools for the Lumen photo editor",
    long_about = "Runs the build steps the Lumen build orchestrator needs: bundling build \
outputs into distribution archives, stamping the license header onto Java sources, and \
fetching the external pieces the build depends on.

Usage:
  lumen_build bundle --target dist/lumen-1.2.zip --target dist/lumen-1.2.tar.gz --prefix lumen-1.2/ lumen.jar docs
  lumen_build stamp --header tools/header.txt src/org/lumen/Main.java
  lumen_build fetch-toolkit --name swt --version 3.5.1 --rev 200909170800 --variant gtk2 --platform linux --arch x86_64 --mirror http://mirror.example.org/pub/eclipse/downloads/drops
  lumen_build sync-source --url https://github.com/lumen-editor/jiu.git --dir jiu

Exit code 0 = requested artifacts guaranteed to exist on disk."
)]
pub struct Args {
    /// Build step to run
    #[command(subcommand)]
    pub command: Command,
}

/// Build steps exposed as subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle build outputs into distribution archives
    Bundle(BundleArgs),
    /// Stamp the license header onto Java sources
    Stamp(StampArgs),
    /// Fetch and unpack a GUI toolkit distribution
    FetchToolkit(FetchToolkitArgs),
    /// Clone or update an external source tree
    SyncSource(SyncSourceArgs),
}

/// Arguments for the `bundle` subcommand
#[derive(clap::Args, Debug)]
pub struct BundleArgs {
    /// Target archive path; repeatable, produced in the order given.
    ///
    /// The suffix picks the format: .zip, .tar.gz or .tar.bz2.
    #[arg(short = 't', long = "target", value_name = "PATH", required = true)]
    pub targets: Vec<PathBuf>,

    /// Prefix prepended to every entry name (e.g. "lumen-1.2/")
    #[arg(short = 'p', long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Source files or directories to pack
    #[arg(value_name = "SOURCE")]
    pub sources: Vec<PathBuf>,
}

/// Arguments for the `stamp` subcommand
#[derive(clap::Args, Debug)]
pub struct StampArgs {
    /// File holding the license header text
    #[arg(long, value_name = "FILE")]
    pub header: PathBuf,

    /// Java source files to stamp
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `fetch-toolkit` subcommand
#[derive(clap::Args, Debug)]
pub struct FetchToolkitArgs {
    /// Toolkit name (e.g. swt)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Release version (e.g. 3.5.1)
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Release revision timestamp (e.g. 200909170800)
    #[arg(long, value_name = "REV")]
    pub rev: String,

    /// Build variant (e.g. gtk2)
    #[arg(long, value_name = "VARIANT")]
    pub variant: String,

    /// Target platform (e.g. linux)
    #[arg(long, value_name = "PLATFORM")]
    pub platform: String,

    /// Target architecture (e.g. x86_64)
    #[arg(long, value_name = "ARCH")]
    pub arch: String,

    /// Mirror base URL
    #[arg(long, value_name = "URL")]
    pub mirror: String,

    /// Expected SHA-256 of the archive, hex-encoded
    #[arg(long, value_name = "HEX")]
    pub sha256: Option<String>,

    /// Directory the archive is downloaded and unpacked into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub work_dir: PathBuf,
}

/// Arguments for the `sync-source` subcommand
#[derive(clap::Args, Debug)]
pub struct SyncSourceArgs {
    /// Repository URL
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Working copy directory
    #[arg(long, value_name = "DIR")]
    pub dir: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Bundle(args) => {
                if args.prefix.contains('\\') {
                    return Err("prefix must use forward slashes".to_string());
                }
                Ok(())
            }
            Command::FetchToolkit(args) => {
                if let Some(sha) = &args.sha256 {
                    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
                        return Err(format!(
                            "--sha256 must be 64 hex characters, got {} of length {}",
                            sha,
                            sha.len()
                        ));
                    }
                }
                if args.mirror.is_empty() {
                    return Err("--mirror cannot be empty".to_string());
                }
                Ok(())
            }
            Command::Stamp(_) | Command::SyncSource(_) => Ok(()),
        }
    }
}
