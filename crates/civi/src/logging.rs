//! Logging bootstrap
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so its logs
//! go to a file in the state directory; when that file cannot be opened the
//! TUI runs without logging rather than corrupting the screen.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize logging for one-shot commands (stderr).
pub fn init_for_cli() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Discover the TUI log file path.
///
/// Priority:
/// 1. $CIVI_LOG_FILE environment variable
/// 2. {XDG state dir}/civi/civi.log
/// 3. {XDG data dir}/civi/civi.log
fn discover_log_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CIVI_LOG_FILE") {
        return Some(PathBuf::from(path));
    }
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("civi").join("civi.log"))
}

/// Initialize logging for the TUI (file target, best effort).
pub fn init_for_tui() {
    let Some(path) = discover_log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}
