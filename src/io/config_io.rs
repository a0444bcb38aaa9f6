use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::AppConfig;
use crate::tui::keymap::{KeyError, KeyMap};

/// Error type for loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid key binding: {0}")]
    KeyError(#[from] KeyError),
}

/// `$XDG_CONFIG_HOME/todochain/config.toml` (or the platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("todochain").join("config.toml"))
}

/// Load the config.
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let config = match explicit {
        Some(path) => read_config(path)?,
        None => match default_config_path() {
            Some(path) => match read_config(&path) {
                Err(ConfigError::ReadError { source, .. })
                    if source.kind() == ErrorKind::NotFound =>
                {
                    debug!(path = %path.display(), "no config file, using defaults");
                    AppConfig::default()
                }
                other => other?,
            },
            None => AppConfig::default(),
        },
    };
    // Surface bad [keys] entries at startup rather than mid-session
    KeyMap::from_config(&config.keys)?;
    Ok(config)
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
