use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Application directory name under the platform data directory.
pub const APP_DIR_NAME: &str = "ventureflow";

/// Stores backend settings and wizard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Backend root, e.g. `https://api.example.com/v1`. Offline when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
    #[serde(default = "Config::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "Config::default_total_steps")]
    pub total_steps: usize,
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,
    #[serde(default = "Config::default_currencies")]
    pub currencies: Vec<String>,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom wizard state file. Defaults to `<base>/wizard_state.json`.
    pub state_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: Self::default_request_timeout_secs(),
            total_steps: Self::default_total_steps(),
            default_currency: Self::default_currency_value(),
            currencies: Self::default_currencies(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            state_file: None,
        }
    }
}

impl Config {
    pub fn default_request_timeout_secs() -> u64 {
        10
    }

    pub fn default_total_steps() -> usize {
        3
    }

    pub fn default_currency_value() -> String {
        "USD".into()
    }

    pub fn default_currencies() -> Vec<String> {
        ["USD", "EUR", "GBP", "LKR"]
            .iter()
            .map(|code| code.to_string())
            .collect()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Platform data directory for the application, falling back to the
    /// home directory and finally the working directory.
    pub fn default_base_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn resolve_state_file(&self, base: &Path) -> PathBuf {
        self.state_file
            .clone()
            .unwrap_or_else(|| base.join("wizard_state.json"))
    }

    /// Rejects settings the wizard cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_steps == 0 {
            return Err(ConfigError::Invalid("total_steps must be at least 1".into()));
        }
        if self.default_currency.trim().is_empty() {
            return Err(ConfigError::Invalid("default_currency cannot be empty".into()));
        }
        if !self
            .currencies
            .iter()
            .any(|code| code.eq_ignore_ascii_case(&self.default_currency))
        {
            return Err(ConfigError::Invalid(format!(
                "default_currency `{}` is not listed in currencies",
                self.default_currency
            )));
        }
        if let Some(url) = &self.api_base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "api_base_url `{}` must start with http:// or https://",
                    url
                )));
            }
        }
        Ok(())
    }
}
