use std::future::Future;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use cm_app::app_paths::AppPaths;
use cm_app::usecases::ApplyModifier;
use cm_core::config::AppConfig;
use cm_core::ports::{AppDirsPort, HistoryObserver};
use cm_core::HistoryEvent;
use cm_infra::{builtin_modifiers, native_modifiers};
use cm_platform::app_dirs::DirsAppDirsAdapter;

use super::cli::Cli;
use super::config::load_config;
use super::settings::resolve_settings;
use super::tracing::init_tracing_subscriber;
use super::wiring::{create_clipboard, wire_services};

/// Run the service until Ctrl-C or end of stdin.
pub async fn run_app(cli: Cli) -> anyhow::Result<()> {
    if cli.list_modifiers {
        for modifier in builtin_modifiers() {
            println!("{:<20} {}", modifier.name, modifier.description);
        }
        for (name, description) in native_modifiers() {
            println!("{name:<20} {description}");
        }
        return Ok(());
    }

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs();
    let logs_dir = app_dirs
        .as_ref()
        .ok()
        .map(|dirs| AppPaths::from_app_dirs(dirs).logs_dir);

    if let Err(err) = init_tracing_subscriber(logs_dir.as_deref()) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let app_dirs = app_dirs.context("Failed to resolve application data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let config = load_app_config(cli.config.clone(), &paths.config_path)?;
    let settings = resolve_settings(&config, &paths, &cli);
    info!(
        history = %settings.history_path.display(),
        poll_interval_ms = settings.poll_interval.as_millis() as u64,
        modifier = ?settings.modifier,
        "starting clipmod"
    );

    let clipboard = create_clipboard(cli.headless);
    let services = wire_services(&settings, clipboard)
        .await
        .context("Failed to assemble services")?;

    let subscription = services.bus.subscribe(logging_observer());
    let poller = Arc::clone(&services.poller).spawn();

    let lines = spawn_line_reader(io::BufReader::new(io::stdin()))
        .context("Failed to start stdin reader")?;
    let served = serve(&services.apply, lines, tokio::io::stdout(), shutdown_signal()).await;

    if let Err(err) = poller.stop().await {
        error!(error = %err, "poller did not stop cleanly");
    }
    services.bus.unsubscribe(subscription);

    if let Err(err) = served {
        error!(error = %format!("{err:#}"), "input loop ended with an error");
    }
    info!(entries = services.store.len().await, "clipmod stopped");
    Ok(())
}

/// An explicit `--config` must load; the default file is optional.
fn load_app_config(explicit: Option<PathBuf>, default_path: &Path) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None if default_path.exists() => match load_config(default_path.to_path_buf()) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(error = %format!("{err:#}"), "ignoring unreadable config file");
                Ok(AppConfig::empty())
            }
        },
        None => Ok(AppConfig::empty()),
    }
}

fn logging_observer() -> Arc<dyn HistoryObserver> {
    Arc::new(|event: &HistoryEvent| {
        let HistoryEvent::Changed { len } = event;
        info!(len = *len, "clipboard history changed");
        Ok::<(), anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C, relying on end of input");
        std::future::pending::<()>().await;
    }
}

const LINE_BUFFER: usize = 16;

/// Read lines on a dedicated OS thread and forward them over a channel.
///
/// A blocking read cannot be cancelled, so it stays off the runtime's
/// blocking pool and never holds up runtime shutdown. The thread exits at
/// end of input or when a line finds the receiver gone.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);
    std::thread::Builder::new()
        .name("clipmod-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;
    Ok(rx)
}

/// Apply the modifier to each input line and write the result as a line.
///
/// Returns when the line channel closes or when `shutdown` resolves. A line
/// already being applied is finished first.
pub async fn serve<W, S>(
    apply: &ApplyModifier,
    mut lines: mpsc::Receiver<io::Result<String>>,
    mut output: W,
    shutdown: S,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested");
                break;
            }
            line = lines.recv() => line,
        };
        let Some(line) = line else {
            info!("input closed");
            break;
        };
        let line = line.context("Failed to read input")?;

        let modified = apply.execute(line).await;
        output.write_all(modified.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }

    Ok(())
}
