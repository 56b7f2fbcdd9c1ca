//! # Application configuration: `around.toml`
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://around.nomoreparties.co/v1/group-12"  # empty = in-memory demo backend
//! token = "c56e30dc-2883-4270-a59e-b2f7bae969c6"
//!
//! [popups]
//! preview_close_delay_ms = 500
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AroundConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend base URL and optional authorization token. |
//! | [`PopupConfig`] | How long the image preview keeps its card after closing, default **500 ms**. |
//!
//! Every section has a default, so a missing or empty file is equivalent to
//! [`AroundConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `around.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AroundConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub popups: PopupConfig,
}

/// Remote backend settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    /// Empty string selects the in-memory demo backend.
    #[serde(default)]
    pub base_url: String,
    /// Sent verbatim in the `Authorization` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Popup behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Delay between hiding the image preview and dropping its card, so the
    /// close transition still has something to show.
    #[serde(default = "default_preview_close_delay")]
    pub preview_close_delay_ms: u64,
}

fn default_preview_close_delay() -> u64 {
    500
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            preview_close_delay_ms: default_preview_close_delay(),
        }
    }
}

impl AroundConfig {
    /// Builder method to point the app at a backend.
    pub fn with_api(mut self, base_url: impl Into<String>, token: Option<String>) -> Self {
        self.api.base_url = base_url.into();
        self.api.token = token;
        self
    }

    /// Builder method to set the preview close delay.
    pub fn with_preview_close_delay_ms(mut self, ms: u64) -> Self {
        self.popups.preview_close_delay_ms = ms;
        self
    }

    pub fn preview_close_delay(&self) -> Duration {
        Duration::from_millis(self.popups.preview_close_delay_ms)
    }

    /// Whether requests should go to a remote server rather than the demo backend.
    pub fn has_remote(&self) -> bool {
        !self.api.base_url.trim().is_empty()
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "around.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
