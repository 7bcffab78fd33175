//! Page Configuration
//!
//! Marker classes, timings and messages. Pages may override any subset;
//! missing fields keep their defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::toggle::{ClassSwap, TogglePlan};

pub const FALLBACK_MESSAGE_EN: &str = "There was an error processing your request. Please try again.";
pub const FALLBACK_MESSAGE_JA: &str = "処理中にエラーが発生しました。もう一度お試しください。";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Flash banners to fade out
    pub alert_selector: String,
    pub dismiss_delay_ms: u32,
    /// Duration of the "slow" fade
    pub fade_duration_ms: u32,
    /// Marker for favorite forms and standalone favorite triggers
    pub favorite_selector: String,
    /// Container replaced by server-rendered fragments
    pub cell_selector: String,
    pub favorited_button_class: String,
    pub unfavorited_button_class: String,
    pub favorited_icon_class: String,
    pub unfavorited_icon_class: String,
    /// Overrides the localized fallback alert text
    pub fallback_message: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            alert_selector: ".alert".to_string(),
            dismiss_delay_ms: 3000,
            fade_duration_ms: 600,
            favorite_selector: ".favorite-form".to_string(),
            cell_selector: "td".to_string(),
            favorited_button_class: "btn-primary".to_string(),
            unfavorited_button_class: "btn-outline-primary".to_string(),
            favorited_icon_class: "bi-clipboard-heart".to_string(),
            unfavorited_icon_class: "bi-clipboard-heart-fill".to_string(),
            fallback_message: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl PageConfig {
    /// Parse and check a JSON override document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    /// Reject class names `classList` would throw on, before any toggle runs
    pub fn validate(self) -> Result<Self, ConfigError> {
        let classes = [
            ("favorited_button_class", &self.favorited_button_class),
            ("unfavorited_button_class", &self.unfavorited_button_class),
            ("favorited_icon_class", &self.favorited_icon_class),
            ("unfavorited_icon_class", &self.unfavorited_icon_class),
        ];
        for (field, value) in classes {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidClass {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(self)
    }

    /// Alert text for failures without a server message, picked by `<html lang>`
    pub fn fallback_message(&self, lang: Option<&str>) -> &str {
        if let Some(message) = self.fallback_message.as_deref() {
            return message;
        }
        match lang.map(|l| l.trim().to_ascii_lowercase()) {
            Some(l) if l == "ja" || l.starts_with("ja-") => FALLBACK_MESSAGE_JA,
            _ => FALLBACK_MESSAGE_EN,
        }
    }

    /// Classes to swap on the button and its icon for the reported state
    pub fn toggle_plan(&self, is_favorite: bool) -> TogglePlan<'_> {
        let (button, icon) = if is_favorite {
            (
                ClassSwap::new(&self.favorited_button_class, &self.unfavorited_button_class),
                ClassSwap::new(&self.favorited_icon_class, &self.unfavorited_icon_class),
            )
        } else {
            (
                ClassSwap::new(&self.unfavorited_button_class, &self.favorited_button_class),
                ClassSwap::new(&self.unfavorited_icon_class, &self.favorited_icon_class),
            )
        };
        TogglePlan { button, icon }
    }
}
