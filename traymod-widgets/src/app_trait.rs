//! # MiniApp Trait - Plugin App Interface
//!
//! This module defines the standard interface for mini-apps hosted by the TrayMod shell.
//!
//! ## Architecture
//!
//! Mini-apps are compiled into the shell and enabled through Cargo features. This
//! trait provides:
//!
//! - **Standardized metadata** - App name, feature key, icon and card height via [`AppInfo`]
//! - **Runtime queries** - App discovery via [`AppRegistry`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use traymod_widgets::{AppRegistry, MiniApp};
//! use traymod_bin::MiniBinApp;
//!
//! let mut registry = AppRegistry::new();
//! registry.register(MiniBinApp::info());
//!
//! for app in registry.apps() {
//!     dashboard.add_card(app.clone(), factory.card_control(app))?;
//! }
//! ```
//!
//! ## Creating a New App
//!
//! ```rust,ignore
//! use traymod_widgets::{AppInfo, MiniApp};
//!
//! pub struct MyApp;
//!
//! impl MiniApp for MyApp {
//!     fn info() -> AppInfo {
//!         AppInfo {
//!             name: "My App",
//!             id: "my-app",
//!             icon: "my_app",
//!             card_height: 90,
//!         }
//!     }
//! }
//! ```

/// Metadata about a registered mini-app
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    /// Display name shown on the card title
    pub name: &'static str,
    /// Feature key, also the key under `mini_apps` in the settings document
    pub id: &'static str,
    /// Icon name, resolved to `icons/<icon>.png`
    pub icon: &'static str,
    /// Declared card height in pixels
    pub card_height: u32,
}

impl AppInfo {
    /// Icon shown next to the card title, relative to the resources directory
    pub fn icon_path(&self) -> String {
        format!("icons/{}.png", self.icon)
    }
}

/// Trait for mini-apps that integrate with the TrayMod shell
///
/// # Example
/// ```ignore
/// impl MiniApp for MiniBinApp {
///     fn info() -> AppInfo {
///         AppInfo {
///             name: "MiniBin",
///             id: "bin",
///             icon: "bin",
///             card_height: 115,
///         }
///     }
/// }
/// ```
pub trait MiniApp {
    /// Returns metadata about this app
    fn info() -> AppInfo
    where
        Self: Sized;
}

/// Compiled-in mini-apps, keyed by feature key.
///
/// The order apps are registered in is the order their cards are laid out,
/// and the set of ids is what a fresh settings document gets seeded with.
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Append an app. A feature key that is already present keeps its first
    /// registration, so one switch never drives two cards.
    pub fn register(&mut self, info: AppInfo) {
        if self.find_by_id(info.id).is_some() {
            ::log::warn!("Mini-app '{}' registered twice, keeping the first", info.id);
            return;
        }
        self.apps.push(info);
    }

    /// Apps in card order
    pub fn apps(&self) -> &[AppInfo] {
        &self.apps
    }

    /// Look an app up by the feature key its switch is stored under
    pub fn find_by_id(&self, feature_key: &str) -> Option<&AppInfo> {
        self.apps.iter().find(|app| app.id == feature_key)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
