//! # Dependency Injection
//!
//! The only place that depends on cm-infra, cm-platform and cm-app at the
//! same time. It assembles adapters behind their ports and makes no
//! business decisions.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use cm_app::usecases::ApplyModifier;
use cm_app::{HistoryStore, NotificationBus, Poller};
use cm_core::ports::{ClipboardSourcePort, ScriptEnginePort, TextTransformPort};
use cm_core::ModifierScript;
use cm_infra::transform::{find_builtin, find_native};
use cm_infra::{JsonFileHistoryRepository, RhaiScriptEngine, ScriptedTransform, SystemClock};
use cm_platform::clipboard::{InMemoryClipboard, SystemClipboard};

use super::settings::{ModifierSource, Settings};

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Failed to read modifier script {path}: {source}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown builtin modifier: {0}")]
    UnknownModifier(String),
}

/// Fully assembled services, shared by the poller and the apply loop.
pub struct AppServices {
    pub bus: Arc<NotificationBus>,
    pub store: Arc<HistoryStore>,
    pub poller: Arc<Poller>,
    pub apply: ApplyModifier,
}

/// System clipboard unless `headless`; falls back to memory when the
/// platform clipboard cannot be opened.
pub fn create_clipboard(headless: bool) -> Arc<dyn ClipboardSourcePort> {
    if headless {
        info!("using in-memory clipboard");
        return Arc::new(InMemoryClipboard::new());
    }

    match SystemClipboard::new() {
        Ok(clipboard) => Arc::new(clipboard),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "system clipboard unavailable, using in-memory clipboard");
            Arc::new(InMemoryClipboard::new())
        }
    }
}

fn load_script_file(path: &Path) -> WiringResult<ModifierScript> {
    let source = std::fs::read_to_string(path).map_err(|source| WiringError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "script".to_string());
    Ok(ModifierScript::from_source(name, source))
}

/// Native modifiers take precedence over builtin scripts of the same name.
pub fn create_transform(settings: &Settings) -> WiringResult<Arc<dyn TextTransformPort>> {
    let script = match &settings.modifier {
        ModifierSource::Builtin(name) => {
            if let Some(native) = find_native(name) {
                return Ok(native);
            }
            find_builtin(name).ok_or_else(|| WiringError::UnknownModifier(name.clone()))?
        }
        ModifierSource::ScriptFile(path) => load_script_file(path)?,
    };

    let engine: Arc<dyn ScriptEnginePort> =
        Arc::new(RhaiScriptEngine::new(settings.transform_timeout));
    Ok(Arc::new(ScriptedTransform::new(engine, script)))
}

/// Build every service from resolved settings.
///
/// Opening the store loads persisted history; a missing or corrupt file
/// yields an empty history.
pub async fn wire_services(
    settings: &Settings,
    clipboard: Arc<dyn ClipboardSourcePort>,
) -> WiringResult<AppServices> {
    let transform = create_transform(settings)?;

    let bus = Arc::new(NotificationBus::new());
    let store = Arc::new(
        HistoryStore::open(
            Arc::new(JsonFileHistoryRepository::new(&settings.history_path)),
            Arc::new(SystemClock),
            Arc::clone(&bus),
        )
        .await,
    );

    let poller = Arc::new(Poller::new(
        Arc::clone(&clipboard),
        Arc::clone(&store),
        settings.poll_interval,
    ));
    let apply = ApplyModifier::new(transform, clipboard, Arc::clone(&store));

    Ok(AppServices {
        bus,
        store,
        poller,
        apply,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings(modifier: ModifierSource, history_path: PathBuf) -> Settings {
        Settings {
            poll_interval: Duration::from_secs(1),
            history_path,
            transform_timeout: Duration::from_millis(500),
            modifier,
        }
    }

    #[test]
    fn builtin_modifier_is_resolved_by_name() {
        let transform = create_transform(&settings(
            ModifierSource::Builtin("utf8-to-hex".into()),
            PathBuf::new(),
        ))
        .unwrap();

        assert_eq!(transform.name(), "utf8-to-hex");
        assert_eq!(transform.apply("AB"), "4142");
    }

    #[test]
    fn native_modifier_is_resolved_by_name() {
        let transform = create_transform(&settings(
            ModifierSource::Builtin("utf8-to-hex-native".into()),
            PathBuf::new(),
        ))
        .unwrap();

        assert_eq!(transform.name(), "utf8-to-hex-native");
        assert_eq!(transform.apply("AB"), "4142");
        assert_eq!(transform.apply("é"), "C3A9");
    }

    #[test]
    fn unknown_builtin_is_an_error() {
        let result = create_transform(&settings(
            ModifierSource::Builtin("rot13".into()),
            PathBuf::new(),
        ));

        assert!(matches!(result, Err(WiringError::UnknownModifier(name)) if name == "rot13"));
    }

    #[test]
    fn script_file_is_named_after_its_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shout.rhai");
        std::fs::write(&path, "fn modify(input) { input + \"!\" }").unwrap();

        let transform =
            create_transform(&settings(ModifierSource::ScriptFile(path), PathBuf::new()))
                .unwrap();

        assert_eq!(transform.name(), "shout");
        assert_eq!(transform.apply("hey"), "hey!");
    }

    #[test]
    fn missing_script_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.rhai");

        let result = create_transform(&settings(ModifierSource::ScriptFile(path), PathBuf::new()));

        assert!(matches!(result, Err(WiringError::ScriptRead { .. })));
    }

    #[tokio::test]
    async fn wired_services_share_one_store() {
        let dir = tempfile::tempdir().unwrap();
        let clipboard: Arc<dyn ClipboardSourcePort> = Arc::new(InMemoryClipboard::new());
        let services = wire_services(
            &settings(
                ModifierSource::Builtin("uppercase".into()),
                dir.path().join("clipboardHistory.json"),
            ),
            Arc::clone(&clipboard),
        )
        .await
        .unwrap();

        assert_eq!(services.apply.execute("abc".into()).await, "ABC");
        assert_eq!(services.poller.tick_once().await, Some(cm_core::RecordOutcome::Unchanged));
        assert_eq!(services.store.len().await, 1);
        assert!(dir.path().join("clipboardHistory.json").exists());
    }
}
