//! Where the demo keeps its log.
//!
//! The terminal belongs to the table while the demo runs, so diagnostics go
//! to a file that is replaced on every start.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Relative log path used when the platform has no cache directory.
pub const FALLBACK_LOG: &str = "cellview-demo.log";

const LOG_NAME: &str = "latest.log";

/// The log of the current run, e.g. `~/.cache/cellview-demo/latest.log` on
/// Linux or `~/Library/Caches/dev.cellview.cellview-demo/latest.log` on macOS.
pub fn log_file() -> PathBuf {
    ProjectDirs::from("dev", "cellview", "cellview-demo")
        .map(|dirs| dirs.cache_dir().join(LOG_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG))
}
