//! Provider Context
//!
//! Configuration shared with every tag group below a `Provider`, resolved
//! through the Leptos Context API instead of prop threading.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use tag_grid::{direction_for_locale, Direction, DEFAULT_LOCALE};

/// Global the host page may set before the app starts
const WINDOW_CONFIG_KEY: &str = "__TAG_GROUP_CONFIG__";

/// Provider-wide defaults
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
    /// BCP 47 tag; the browser language when absent
    pub locale: Option<String>,
    /// Disables every group that does not set `is_disabled` itself
    pub is_disabled: Option<bool>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: Option<String>,
}

impl ProviderConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_string() {
            let json = value.as_string().unwrap_or_default();
            return Self::from_json(&json);
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }

    /// Read `window.__TAG_GROUP_CONFIG__`, `None` when the page sets nothing
    pub fn from_window() -> Option<Result<Self, String>> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(Self::from_js(value))
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Info)
    }
}

/// Makes `config` available to every descendant
#[component]
pub fn Provider(config: ProviderConfig, children: Children) -> impl IntoView {
    provide_context(config);
    children()
}

pub fn use_provider_config() -> Option<ProviderConfig> {
    use_context::<ProviderConfig>()
}

/// Explicit prop wins over the provider, then enabled
pub fn resolve_disabled(prop: Option<bool>, provider: Option<&ProviderConfig>) -> bool {
    prop.or_else(|| provider.and_then(|config| config.is_disabled))
        .unwrap_or(false)
}

/// Resolved locale and its text direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub locale: String,
    pub direction: Direction,
}

/// Provider locale, then browser language, then the default locale
pub fn resolve_locale(provider: Option<&str>, browser: Option<String>) -> Locale {
    let locale = provider
        .map(str::to_string)
        .or(browser)
        .filter(|locale| !locale.is_empty())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let direction = direction_for_locale(&locale);
    Locale { locale, direction }
}

pub fn use_locale() -> Locale {
    let provider = use_provider_config();
    let browser = web_sys::window().and_then(|window| window.navigator().language());
    resolve_locale(provider.as_ref().and_then(|config| config.locale.as_deref()), browser)
}
