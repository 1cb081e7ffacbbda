use std::path::PathBuf;

use cm_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "ClipboardModifier";
const PROFILE_ENV: &str = "CLIPMOD_PROFILE";

fn resolved_app_dir_name() -> String {
    match std::env::var(PROFILE_ENV) {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    /// Creates a new DirsAppDirsAdapter with no base data directory override.
    ///
    /// # Examples
    ///
    /// ```
    /// use cm_platform::app_dirs::DirsAppDirsAdapter;
    /// let _ = DirsAppDirsAdapter::new();
    /// ```
    pub fn new() -> Self {
        Self {
            base_data_dir_override: None,
        }
    }

    /// Creates an adapter rooted at `base` instead of the system data directory.
    pub fn with_base_data_dir(base: PathBuf) -> Self {
        Self {
            base_data_dir_override: Some(base),
        }
    }

    /// Resolve the base data directory used for application data.
    ///
    /// Returns the override if one was set, otherwise `dirs::data_dir()`
    /// (`~/Library/Application Support` on macOS, `$XDG_DATA_HOME` or
    /// `~/.local/share` on Linux, `%APPDATA%` on Windows).
    pub fn base_data_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_dir_override {
            return Some(base.clone());
        }
        dirs::data_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_dir()
            .ok_or(AppDirsError::DataDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}
