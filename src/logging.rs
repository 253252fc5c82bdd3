//! File-based logging.
//!
//! The terminal belongs to the UI while a program runs, so log output goes to
//! a file or nowhere at all.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber that appends to `path`.
///
/// `RUST_LOG` overrides `level` when it is set. Without a path no subscriber
/// is installed and tracing macros are no-ops.
pub fn init(path: Option<&Path>, level: &str) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("countdown_widgets={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
