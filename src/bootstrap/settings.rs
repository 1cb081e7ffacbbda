//! Effective settings: [`AppConfig`] facts plus command-line overrides,
//! with defaults filled in.

use std::path::PathBuf;
use std::time::Duration;

use cm_app::app_paths::AppPaths;
use cm_app::runtime::DEFAULT_POLL_INTERVAL;
use cm_core::config::AppConfig;
use cm_infra::transform::DEFAULT_SCRIPT_TIMEOUT;

use super::cli::Cli;

pub const DEFAULT_MODIFIER: &str = "utf8-to-hex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierSource {
    Builtin(String),
    ScriptFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub poll_interval: Duration,
    pub history_path: PathBuf,
    pub transform_timeout: Duration,
    pub modifier: ModifierSource,
}

/// Command line wins over the config file; zero and empty values mean unset.
pub fn resolve_settings(config: &AppConfig, paths: &AppPaths, cli: &Cli) -> Settings {
    let poll_interval = match config.poll_interval_ms {
        0 => DEFAULT_POLL_INTERVAL,
        ms => Duration::from_millis(ms),
    };

    let history_path = if config.history_path.as_os_str().is_empty() {
        paths.history_path.clone()
    } else {
        config.history_path.clone()
    };

    let transform_timeout = match config.transform_timeout_ms {
        0 => DEFAULT_SCRIPT_TIMEOUT,
        ms => Duration::from_millis(ms),
    };

    let modifier = if let Some(script) = &cli.script {
        ModifierSource::ScriptFile(script.clone())
    } else if let Some(name) = &cli.modifier {
        ModifierSource::Builtin(name.clone())
    } else if !config.script_path.as_os_str().is_empty() {
        ModifierSource::ScriptFile(config.script_path.clone())
    } else {
        ModifierSource::Builtin(DEFAULT_MODIFIER.to_string())
    };

    Settings {
        poll_interval,
        history_path,
        transform_timeout,
        modifier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use cm_core::app_dirs::AppDirs;

    fn paths() -> AppPaths {
        AppPaths::from_app_dirs(&AppDirs {
            app_data_root: PathBuf::from("/data/ClipboardModifier"),
        })
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("clipmod").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let settings = resolve_settings(&AppConfig::empty(), &paths(), &cli(&[]));

        assert_eq!(settings.poll_interval, Duration::from_secs(1));
        assert_eq!(
            settings.history_path,
            PathBuf::from("/data/ClipboardModifier/clipboardHistory.json")
        );
        assert_eq!(settings.transform_timeout, Duration::from_millis(500));
        assert_eq!(
            settings.modifier,
            ModifierSource::Builtin("utf8-to-hex".to_string())
        );
    }

    #[test]
    fn config_values_are_used_when_set() {
        let config = AppConfig {
            poll_interval_ms: 200,
            history_path: PathBuf::from("/elsewhere/history.json"),
            transform_timeout_ms: 50,
            script_path: PathBuf::from("/scripts/modify.rhai"),
        };

        let settings = resolve_settings(&config, &paths(), &cli(&[]));

        assert_eq!(settings.poll_interval, Duration::from_millis(200));
        assert_eq!(settings.history_path, PathBuf::from("/elsewhere/history.json"));
        assert_eq!(settings.transform_timeout, Duration::from_millis(50));
        assert_eq!(
            settings.modifier,
            ModifierSource::ScriptFile(PathBuf::from("/scripts/modify.rhai"))
        );
    }

    #[test]
    fn command_line_overrides_config_script() {
        let config = AppConfig {
            script_path: PathBuf::from("/scripts/modify.rhai"),
            ..AppConfig::empty()
        };

        let by_script = resolve_settings(&config, &paths(), &cli(&["--script", "/cli.rhai"]));
        assert_eq!(
            by_script.modifier,
            ModifierSource::ScriptFile(PathBuf::from("/cli.rhai"))
        );

        let by_name = resolve_settings(&config, &paths(), &cli(&["--modifier", "trim"]));
        assert_eq!(by_name.modifier, ModifierSource::Builtin("trim".to_string()));
    }
}
