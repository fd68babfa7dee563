//! Shell configuration: where settings live and the layout metrics.

use std::env;
use std::path::PathBuf;

use traymod_widgets::LayoutMetrics;

use crate::widgets::sidebar::MenuMetrics;

/// Environment variable overriding the settings document location
pub const SETTINGS_PATH_ENV: &str = "TRAYMOD_SETTINGS_PATH";

const APP_DIR: &str = "traymod";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShellConfig {
    pub settings_path: PathBuf,
    pub layout: LayoutMetrics,
    pub menu: MenuMetrics,
}

impl ShellConfig {
    /// Config with default metrics and an explicit settings path
    pub fn with_settings_path(settings_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            layout: LayoutMetrics::default(),
            menu: MenuMetrics::default(),
        }
    }

    /// Resolve the settings path from the environment.
    ///
    /// Order: `TRAYMOD_SETTINGS_PATH`, then `<config dir>/traymod/settings.json`,
    /// then `settings.json` in the working directory.
    pub fn resolve() -> Self {
        Self::with_settings_path(Self::settings_path_from(
            env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from),
            dirs::config_dir(),
        ))
    }

    fn settings_path_from(overridden: Option<PathBuf>, config_dir: Option<PathBuf>) -> PathBuf {
        if let Some(path) = overridden.filter(|p| !p.as_os_str().is_empty()) {
            return path;
        }
        match config_dir {
            Some(mut path) => {
                path.push(APP_DIR);
                path.push(SETTINGS_FILE);
                path
            }
            None => {
                ::log::warn!("Cannot determine config directory, using ./{}", SETTINGS_FILE);
                PathBuf::from(SETTINGS_FILE)
            }
        }
    }
}
