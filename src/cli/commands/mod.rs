//! Command execution functions for the build steps.

// Submodules
pub mod bundle;
pub mod fetch_toolkit;
pub mod stamp;
pub mod sync_source;
