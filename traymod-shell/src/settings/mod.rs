//! Persisted mini-app settings: the document, its store and the toggles on top.

pub mod document;
pub mod store;
pub mod toggle;

pub use document::SettingsDocument;
pub use store::{FsStorage, MemoryStorage, SettingsStore, TextStorage};
pub use toggle::{shared, SharedSettingsStore, ToggleController};
