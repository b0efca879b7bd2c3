use log::{warn, Level};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use web_sys::window;

use crate::state::scroll::ScrollConfig;
use crate::state::toggle_group::ToggleMode;
use crate::theme::Theme;

/// Attribute on `<html>` that can override the built-in page settings.
pub const CONFIG_ATTR: &str = "data-site-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// The submit button shows the progress.
    #[default]
    Inline,
    /// A notification banner slides in.
    Banner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeConfig {
    pub success_message: String,
    pub feedback: Feedback,
    pub submit_delay_ms: u32,
    pub reset_delay_ms: u32,
    pub error_lifetime_ms: u32,
    pub banner_lifetime_ms: u32,
}

impl Default for SubscribeConfig {
    fn default() -> Self {
        Self {
            success_message: "Thank you for subscribing! We'll keep you updated with the latest from ReSwap.".to_string(),
            feedback: Feedback::Inline,
            submit_delay_ms: 1000,
            reset_delay_ms: 2000,
            error_lifetime_ms: 3000,
            banner_lifetime_ms: 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll: ScrollConfig,
    pub scroll_throttle_ms: f64,
    pub faq_mode: ToggleMode,
    pub subscribe: SubscribeConfig,
    pub mobile_breakpoint_px: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            scroll_throttle_ms: 16.0,
            faq_mode: ToggleMode::Exclusive,
            subscribe: SubscribeConfig::default(),
            mobile_breakpoint_px: 768,
        }
    }
}

impl PageConfig {
    pub fn for_theme(theme: Theme) -> Self {
        let mut config = Self::default();
        match theme {
            Theme::Default => {}
            Theme::FitShare => {
                config.scroll.scrolled_threshold = 50.0;
            }
            Theme::NeedShare => {
                config.scroll.direction_enabled = true;
                config.subscribe.feedback = Feedback::Banner;
                config.subscribe.success_message =
                    "Thanks for subscribing to NeedShare updates!".to_string();
            }
        }
        config
    }

    pub fn mobile_query(&self) -> String {
        format!("(max-width: {}px)", self.mobile_breakpoint_px)
    }

    /// Overlays a JSON object onto `self`. Keys missing from the override
    /// keep their current values.
    pub fn with_override(&self, json: &str) -> Result<Self, serde_json::Error> {
        let mut base = serde_json::to_value(self)?;
        let patch: Value = serde_json::from_str(json)?;
        merge(&mut base, patch);
        serde_json::from_value(base)
    }
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                merge(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Built-in settings for `theme`, overridden by the document's
/// `data-site-config` attribute when present.
pub fn load(theme: Theme) -> PageConfig {
    let config = PageConfig::for_theme(theme);

    let Some(raw) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(CONFIG_ATTR))
    else {
        return config;
    };

    match config.with_override(&raw) {
        Ok(overridden) => overridden,
        Err(e) => {
            warn!("Ignoring invalid {}: {}", CONFIG_ATTR, e);
            config
        }
    }
}
