//! Tracing configuration for clipmod
//!
//! - **Environment filter**: honours `RUST_LOG`, otherwise debug in debug
//!   builds and info in release builds
//! - **Stderr**: human-readable lines with UTC timestamps, coloured only
//!   when stderr is a terminal and `NO_COLOR` is unset
//! - **File**: the same format without colours, written through a
//!   non-blocking appender to `<logs_dir>/clipmod.log`

use std::{ffi::OsStr, fs, io, io::IsTerminal, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

pub const LOG_FILE_NAME: &str = "clipmod.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Colour escapes only make sense on an interactive terminal.
fn use_ansi(stream_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    let colour_disabled = no_color.is_some_and(|value| !value.is_empty());
    stream_is_terminal && !colour_disabled
}

/// Build the default filter directives for tracing.
///
/// The workspace crates follow the global level; the script interpreter's
/// own diagnostics are kept at warn.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![level.to_string()];
    for target in ["clipmod", "cm_app", "cm_infra", "cm_platform", "cm_core"] {
        directives.push(format!("{target}={level}"));
    }
    directives.push("rhai=warn".to_string());
    directives
}

/// Initialize the global tracing subscriber.
///
/// `logs_dir` is `None` when the data directory could not be resolved;
/// logging then goes to stderr only. A file logging failure is reported
/// and also leaves stderr as the only sink.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(logs_dir: Option<&Path>) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    // Stdout carries the apply results; logs go to stderr so they never mix.
    let console_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match logs_dir.map(build_file_writer) {
        Some(Ok(writer)) => Some(writer),
        Some(Err(err)) => {
            eprintln!("Failed to initialize file logging, falling back to console: {err:#}");
            None
        }
        None => None,
    };

    let no_color = std::env::var_os("NO_COLOR");
    let console_ansi = use_ansi(io::stderr().is_terminal(), no_color.as_deref());
    let console_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(console_ansi)
        .with_writer(console_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
