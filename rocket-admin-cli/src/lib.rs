//! rocket-admin-cli - command-line entry points for Rocket Engine
//! Backend administration
//!
//! Two binaries share this crate:
//! - `rocket-reseed` deletes and regenerates backend seed data
//! - `rocket-sync` reconciles backend records against the Truth Ledger
//!
//! Both accept the same flags (`--local`, `--engines`, `--vehicles`,
//! `--quiet`), issue a single POST, and exit 0 on success or 1 on any
//! failure.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;
pub mod run;

/// Initialize tracing with env-filter support (RUST_LOG).
///
/// Diagnostics write to stderr so piped stdout carries only the banner
/// and summary lines.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
