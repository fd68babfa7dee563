//! # TrayMod Widgets
//!
//! Shared building blocks for the TrayMod shell and its mini-apps.
//!
//! Nothing in this crate touches a GUI toolkit. Elements on screen are reached
//! through the [`render`] traits, which the toolkit layer implements.
//!
//! ## Modules
//!
//! - [`theme`] - Appearance mode and layout pixel constants
//! - [`render`] - Render target capabilities, style and icon tokens
//! - [`column_stack`] - Two-column card placement for the mini-apps page
//! - [`app_trait`] - Plugin app interface (`MiniApp`, `AppRegistry`)
//!
//! ## Plugin Apps
//!
//! Apps implement the [`MiniApp`] trait for standardized registration:
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

pub mod app_trait;
pub mod column_stack;
pub mod render;
pub mod theme;

// Re-export app trait types for convenience
pub use app_trait::{AppInfo, AppRegistry, MiniApp};

// Re-export commonly used types
pub use column_stack::{Card, ColumnStackLayout, LayoutMetrics, Placement, Position};
pub use render::{
    CardControl, HeadlessTarget, IconHolder, IconToken, MenuControl, RenderTarget, StyleToken,
    Styled,
};
pub use theme::Appearance;
