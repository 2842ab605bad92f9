//! Lumen Build Tools - build automation for the Lumen photo editor.
//!
//! This binary packages build outputs into distribution archives, stamps
//! license headers onto Java sources, and fetches the external pieces the
//! build depends on (GUI toolkit distribution, imaging library sources).

mod bundler;
mod cli;
mod error;
mod source;
mod stamp;
mod toolkit;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
