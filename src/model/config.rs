use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::DEFAULT_COLOR;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    /// Logical action name → key string, e.g. `toggle = "ctrl+d"`
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Title of the category created at startup
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Color given to new categories
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Theme overrides as `#RRGGBB`, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_category: default_category(),
            default_color: default_color(),
            colors: HashMap::new(),
        }
    }
}

fn default_category() -> String {
    "uncategorised".to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// EnvFilter directive, e.g. `"debug"` or `"todochain=trace"`
    #[serde(default)]
    pub level: Option<String>,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default)]
    pub file: Option<String>,
}
