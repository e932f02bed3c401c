//! Tracing setup for both binaries.
//!
//! Both programs own the terminal, so logs go to a file, never to
//! stdout/stderr. Filter priority: `MUXLAUNCH_LOG`, then `RUST_LOG`, then the
//! `--verbose` flag (debug) or the default (`warn`).

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "MUXLAUNCH_LOG";

/// Default log location: `~/.cache/muxlaunch/<binary>.log`.
pub fn default_log_path(binary: &str) -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".cache");
        path.push("muxlaunch");
        path.push(format!("{binary}.log"));
        path
    })
}

pub fn build_env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "muxlaunch=debug" } else { "warn" };
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .find_map(|var| {
            std::env::var(var)
                .ok()
                .and_then(|directives| EnvFilter::try_new(directives).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Plain-text subscriber writing to `writer`.
pub fn build_subscriber<W>(
    writer: W,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .finish()
}

/// Installs the global subscriber writing to `path`.
///
/// Logging stays disabled if the file cannot be opened or a subscriber is
/// already installed.
pub fn init(path: Option<&Path>, verbose: bool) {
    let Some(path) = path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    let subscriber = build_subscriber(Mutex::new(file), build_env_filter(verbose));
    let _ = tracing::subscriber::set_global_default(subscriber);
}
