//! # TrayMod Shell
//!
//! Navigation shell for TrayMod mini-apps: a side menu switching between
//! exclusive pages, a two-column card dashboard and per-app switches persisted
//! in a whole-document settings file.
//!
//! ## Modules
//!
//! - [`settings`] - Settings document, whole-document store, toggle controller
//! - [`navigation`] - Page registry with a single active page
//! - [`widgets`] - Sidebar menu binding and the Mini-Apps dashboard
//! - [`app`] - Composition root and event dispatch
//! - [`config`] - Settings path resolution and layout metrics
//!
//! ## Threading
//!
//! The shell is driven from the UI thread and every handler runs to
//! completion. Toggle controllers still lock the shared store across each
//! load-modify-save, so dispatching flips from other threads cannot lose updates.

pub mod app;
pub mod config;
pub mod error;
pub mod navigation;
pub mod settings;
pub mod widgets;

#[cfg(test)]
mod tests {
    mod shell_test;
}

pub use app::{installed_apps, ControlFactory, Shell, ShellEvent};
pub use config::ShellConfig;
pub use error::{ShellError, ShellResult};
pub use navigation::{NavigationModel, Page, PageId, PageTransition};
pub use settings::{SettingsDocument, SettingsStore, SharedSettingsStore, ToggleController};
pub use widgets::dashboard::Dashboard;
pub use widgets::sidebar::{EntryId, MenuMetrics, MenuSelectionBinding};
