//! Reading and parsing `config.toml`.

use std::io::ErrorKind;
use std::path::Path;

use sawit_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use crate::schema::SawitConfig;
use crate::validation;

/// Parse TOML text. Missing sections and fields take their defaults.
pub fn parse_config(content: &str) -> Result<SawitConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load `path`.
///
/// A config that parses but fails validation is still returned; the
/// problems are logged so a typo does not lock the user out of chatting.
pub fn load_from_path(path: &Path) -> Result<SawitConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "cannot read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse_config(&content).map_err(|e| match e {
        ConfigError::ParseError(msg) => {
            ConfigError::ParseError(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; continuing with the values as written");
    }

    info!(path = %path.display(), page = %config.chat.page, "chat config loaded");
    Ok(config)
}

/// Load the platform default config, writing the template on first run.
pub fn load_default() -> Result<SawitConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(SawitConfig::default())
        }
        result => result,
    }
}
