//! Per-feature on/off switches backed by the settings document.
//!
//! Each switch exists twice: the authoritative value in the persisted document
//! and the display value cached here. A flip only updates the display value
//! after the document has been saved, so a failed save leaves the switch as
//! it was on screen.
//!
//! Every flip is a load-modify-save of the whole document. Controllers share
//! one [`SharedSettingsStore`] and hold its lock across the full sequence, so
//! flips of different features never overwrite each other even when issued
//! from several threads.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use super::store::SettingsStore;
use crate::error::{ShellError, ShellResult};

/// Settings store shared by every controller of a shell
pub type SharedSettingsStore = Arc<Mutex<SettingsStore>>;

pub fn shared(store: SettingsStore) -> SharedSettingsStore {
    Arc::new(Mutex::new(store))
}

pub struct ToggleController {
    store: SharedSettingsStore,
    display: HashMap<String, bool>,
}

impl ToggleController {
    pub fn new(store: SharedSettingsStore) -> Self {
        Self {
            store,
            display: HashMap::new(),
        }
    }

    /// Read the persisted value of a feature and start displaying it
    pub fn initialize(&mut self, feature_key: &str) -> ShellResult<bool> {
        let doc = self.store.lock().load()?;
        let enabled = doc
            .feature_switch(feature_key)
            .ok_or_else(|| ShellError::FeatureUnknown(feature_key.to_string()))?;

        self.display.insert(feature_key.to_string(), enabled);
        ::log::debug!("Feature '{}' initialized as {}", feature_key, on_off(enabled));
        Ok(enabled)
    }

    /// Negate the persisted value of a feature and return the new value
    pub fn flip(&mut self, feature_key: &str) -> ShellResult<bool> {
        let enabled = {
            let store = self.store.lock();
            let mut doc = store.load()?;
            let enabled = !doc
                .feature_switch(feature_key)
                .ok_or_else(|| ShellError::FeatureUnknown(feature_key.to_string()))?;
            doc.set_feature_switch(feature_key, enabled)?;
            store.save(&doc)?;
            enabled
        };

        self.display.insert(feature_key.to_string(), enabled);
        ::log::info!("Feature '{}' switched {}", feature_key, on_off(enabled));
        Ok(enabled)
    }

    /// Value currently shown for a feature, if it was initialized
    pub fn display_state(&self, feature_key: &str) -> Option<bool> {
        self.display.get(feature_key).copied()
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
