//! In-memory form of the persisted settings document.
//!
//! Layout on disk:
//!
//! ```json
//! {
//!     "appearance_mode": "light",
//!     "mini_apps": {
//!         "bin": {
//!             "switch_active": true
//!         }
//!     }
//! }
//! ```
//!
//! The document is always read and written whole. Keys the shell does not know
//! about are carried through untouched.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};
use traymod_widgets::Appearance;

use crate::error::{ShellError, ShellResult};

const MINI_APPS_KEY: &str = "mini_apps";
const SWITCH_ACTIVE_KEY: &str = "switch_active";
const APPEARANCE_KEY: &str = "appearance_mode";

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// Parse document text. The error string describes why it is not well-formed.
    pub fn parse(text: &str) -> Result<Self, String> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(root)) => Ok(Self { root }),
            Ok(_) => Err("top-level value is not an object".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }

    /// Serialize with four-space indentation
    pub fn to_pretty_string(&self) -> ShellResult<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.root.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Fresh document with every listed feature switched off
    pub fn seed<'a>(features: impl IntoIterator<Item = &'a str>) -> Self {
        let mut mini_apps = Map::new();
        for key in features {
            mini_apps.insert(key.to_string(), json!({ SWITCH_ACTIVE_KEY: false }));
        }

        let mut root = Map::new();
        root.insert(
            APPEARANCE_KEY.to_string(),
            Value::String(Appearance::default().as_str().to_string()),
        );
        root.insert(MINI_APPS_KEY.to_string(), Value::Object(mini_apps));
        Self { root }
    }

    /// Value at `mini_apps.<key>.switch_active`, `None` if absent or not a boolean
    pub fn feature_switch(&self, key: &str) -> Option<bool> {
        self.root
            .get(MINI_APPS_KEY)?
            .get(key)?
            .get(SWITCH_ACTIVE_KEY)?
            .as_bool()
    }

    /// Overwrite an existing switch. Missing features are not created.
    pub fn set_feature_switch(&mut self, key: &str, enabled: bool) -> ShellResult<()> {
        let slot = self
            .root
            .get_mut(MINI_APPS_KEY)
            .and_then(|apps| apps.get_mut(key))
            .and_then(|feature| feature.get_mut(SWITCH_ACTIVE_KEY))
            .filter(|value| value.is_boolean())
            .ok_or_else(|| ShellError::FeatureUnknown(key.to_string()))?;

        *slot = Value::Bool(enabled);
        Ok(())
    }

    /// Feature keys present under `mini_apps`, in document order
    pub fn feature_keys(&self) -> Vec<&str> {
        self.root
            .get(MINI_APPS_KEY)
            .and_then(Value::as_object)
            .map(|apps| apps.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Icon variant set; light when absent or unrecognized
    pub fn appearance(&self) -> Appearance {
        self.root
            .get(APPEARANCE_KEY)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "window": { "width": 600 },
        "mini_apps": {
            "bin": { "switch_active": true, "label": "Bin" },
            "clock": { "switch_active": false }
        }
    }"#;

    #[test]
    fn test_reads_feature_switches() {
        let doc = SettingsDocument::parse(SAMPLE).unwrap();

        assert_eq!(doc.feature_switch("bin"), Some(true));
        assert_eq!(doc.feature_switch("clock"), Some(false));
        assert_eq!(doc.feature_switch("weather"), None);
        assert_eq!(doc.feature_keys(), vec!["bin", "clock"]);
    }

    #[test]
    fn test_rejects_malformed_and_non_object_documents() {
        assert!(SettingsDocument::parse("{ not json").is_err());
        assert!(SettingsDocument::parse("[1, 2]").is_err());
        assert!(SettingsDocument::parse("").is_err());
    }

    #[test]
    fn test_set_switch_keeps_unrelated_keys() {
        let mut doc = SettingsDocument::parse(SAMPLE).unwrap();
        doc.set_feature_switch("bin", false).unwrap();

        let reparsed = SettingsDocument::parse(&doc.to_pretty_string().unwrap()).unwrap();
        assert_eq!(reparsed.feature_switch("bin"), Some(false));
        assert_eq!(reparsed.root["window"]["width"], 600);
        assert_eq!(reparsed.root["mini_apps"]["bin"]["label"], "Bin");
    }

    #[test]
    fn test_set_switch_does_not_create_features() {
        let mut doc = SettingsDocument::parse(SAMPLE).unwrap();
        let err = doc.set_feature_switch("weather", true).unwrap_err();

        assert!(matches!(err, ShellError::FeatureUnknown(ref key) if key == "weather"));
        assert_eq!(doc.feature_switch("weather"), None);
    }

    #[test]
    fn test_non_boolean_switch_is_unknown() {
        let mut doc =
            SettingsDocument::parse(r#"{"mini_apps": {"bin": {"switch_active": "yes"}}}"#).unwrap();

        assert_eq!(doc.feature_switch("bin"), None);
        assert!(doc.set_feature_switch("bin", true).is_err());
    }

    #[test]
    fn test_pretty_output_uses_four_space_indent() {
        let doc = SettingsDocument::parse(r#"{"mini_apps": {"bin": {"switch_active": true}}}"#)
            .unwrap();
        let text = doc.to_pretty_string().unwrap();

        assert!(text.starts_with("{\n    \"mini_apps\": {\n        \"bin\""));
    }

    #[test]
    fn test_seed_and_appearance() {
        let doc = SettingsDocument::seed(["bin", "clock"]);
        assert_eq!(doc.feature_switch("bin"), Some(false));
        assert_eq!(doc.feature_switch("clock"), Some(false));
        assert_eq!(doc.appearance(), Appearance::Light);

        let dark = SettingsDocument::parse(r#"{"appearance_mode": "dark"}"#).unwrap();
        assert_eq!(dark.appearance(), Appearance::Dark);

        let odd = SettingsDocument::parse(r#"{"appearance_mode": "sepia"}"#).unwrap();
        assert_eq!(odd.appearance(), Appearance::Light);
    }
}
