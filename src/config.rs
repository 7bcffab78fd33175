//! Page Config Loading
//!
//! Sources, first hit wins:
//! 1. `window.__BOARD_UI__` object set by the page template
//! 2. `<script type="application/json" id="board-ui-config">`
//! 3. built-in defaults

use favorite_protocol::PageConfig;
use leptos::prelude::{document, window};
use wasm_bindgen::JsValue;

pub const GLOBAL_CONFIG_KEY: &str = "__BOARD_UI__";
pub const CONFIG_SCRIPT_ID: &str = "board-ui-config";

pub fn load_page_config() -> PageConfig {
    from_global()
        .or_else(from_script)
        .unwrap_or_default()
}

fn from_global() -> Option<PageConfig> {
    let value = js_sys::Reflect::get(&window(), &JsValue::from_str(GLOBAL_CONFIG_KEY)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let decoded = serde_wasm_bindgen::from_value::<PageConfig>(value)
        .map_err(|e| e.to_string())
        .and_then(|config| config.validate().map_err(|e| e.to_string()));
    match decoded {
        Ok(config) => {
            log::debug!("[Config] Loaded from window.{}", GLOBAL_CONFIG_KEY);
            Some(config)
        }
        Err(e) => {
            log::warn!("[Config] Ignoring window.{}: {}", GLOBAL_CONFIG_KEY, e);
            None
        }
    }
}

fn from_script() -> Option<PageConfig> {
    let text = document().get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()?;
    match PageConfig::from_json(&text) {
        Ok(config) => {
            log::debug!("[Config] Loaded from #{}", CONFIG_SCRIPT_ID);
            Some(config)
        }
        Err(e) => {
            log::warn!("[Config] Ignoring #{}: {}", CONFIG_SCRIPT_ID, e);
            None
        }
    }
}
