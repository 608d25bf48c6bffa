//! User settings record and its persistent store.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::providers::ProviderId;
use crate::proxy::ProxyId;
use crate::store::BlobStore;

/// Storage key for the settings blob.
pub const SETTINGS_KEY: &str = "settings";

/// Ad blocking toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdBlock {
    Enabled,
    #[default]
    Disabled,
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Where proxied pages are opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The current tab.
    #[default]
    Default,
    /// A positioned popup window.
    Window,
}

/// Tab cloaking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabCloak {
    /// The destination is opened directly.
    #[default]
    None,
    /// The destination is framed inside a blank decoy page, keeping it
    /// out of the visible address bar.
    Blank,
}

/// The full user configuration record.
///
/// Always fully populated: loading fills any missing field from the
/// defaults, so callers never see a partial record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub search_engine: ProviderId,
    pub proxy: ProxyId,
    pub ad_block: AdBlock,
    pub theme: Theme,
    pub display: DisplayMode,
    pub tab_cloak: TabCloak,
    /// Case-sensitive label -> destination mapping, checked before input
    /// normalization.
    pub shortcuts: HashMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search_engine: ProviderId::Google,
            proxy: ProxyId::Uv,
            ad_block: AdBlock::Disabled,
            theme: Theme::Dark,
            display: DisplayMode::Default,
            tab_cloak: TabCloak::None,
            shortcuts: HashMap::from([
                ("discord".to_string(), "https://discord.com/app".to_string()),
                ("google".to_string(), "https://www.google.com/".to_string()),
                ("youtube".to_string(), "https://www.youtube.com/".to_string()),
                ("reddit".to_string(), "https://www.reddit.com/".to_string()),
            ]),
        }
    }
}

/// Reads and writes the settings record through a [`BlobStore`].
///
/// Loading never fails and is repeated before every navigation and
/// suggestion action; nothing is cached across calls.
pub struct SettingsStore {
    store: Arc<dyn BlobStore>,
}

impl SettingsStore {
    /// Creates a store over the given blob backend.
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Loads the current settings.
    ///
    /// An absent or undecodable blob yields the defaults wholesale. A
    /// decodable JSON object overlays the defaults field by field; a
    /// present field whose value does not deserialize is skipped and
    /// keeps its default. Unknown top-level keys are ignored.
    pub fn load(&self) -> Settings {
        let Some(raw) = self.store.get(SETTINGS_KEY) else {
            return Settings::default();
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(fields)) => overlay(Settings::default(), &fields),
            _ => {
                debug!("stored settings blob is not a JSON object, using defaults");
                Settings::default()
            }
        }
    }

    /// Serializes and persists the full record. No partial updates.
    pub fn save(&self, settings: &Settings) {
        let raw = serde_json::to_string(settings).expect("settings always serialize");
        self.store.set(SETTINGS_KEY, &raw);
    }
}

fn overlay(mut base: Settings, fields: &Map<String, Value>) -> Settings {
    fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
        fields
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    if let Some(value) = field(fields, "searchEngine") {
        base.search_engine = value;
    }
    if let Some(value) = field(fields, "proxy") {
        base.proxy = value;
    }
    if let Some(value) = field(fields, "adBlock") {
        base.ad_block = value;
    }
    if let Some(value) = field(fields, "theme") {
        base.theme = value;
    }
    if let Some(value) = field(fields, "display") {
        base.display = value;
    }
    if let Some(value) = field(fields, "tabCloak") {
        base.tab_cloak = value;
    }
    if let Some(value) = field(fields, "shortcuts") {
        base.shortcuts = value;
    }
    base
}
