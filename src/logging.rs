//! logging — crate-wide structured logger.
//!
//! Purpose
//! -------
//! Give the spatial engines a single `slog` root logger to report
//! construction and mutation events without forcing any output on library
//! users.
//!
//! Key behaviors
//! -------------
//! - [`logger`] returns the root logger, building it on first use.
//! - By default the root drains to `slog::Discard`.
//! - With the `obs_slog` feature the root writes to stderr through a
//!   non-blocking terminal drain (`slog-term` + `slog-async`).
//! - [`set_logger`] lets an embedding application install its own root
//!   before the first log call; later calls are refused.
use slog::{Logger, o};
use std::sync::OnceLock;

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Root logger for this crate.
pub fn logger() -> &'static Logger {
    ROOT.get_or_init(build_root)
}

/// Install `logger` as the crate root.
///
/// Returns the logger back as `Err` if a root is already in place (either
/// installed earlier or built lazily by a previous [`logger`] call).
pub fn set_logger(logger: Logger) -> Result<(), Logger> {
    ROOT.set(logger)
}

#[cfg(feature = "obs_slog")]
fn build_root() -> Logger {
    use slog::Drain;

    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("crate" => env!("CARGO_PKG_NAME")))
}

#[cfg(not(feature = "obs_slog"))]
fn build_root() -> Logger {
    Logger::root(slog::Discard, o!())
}
