//! Sawit configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sawit_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SawitConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use sawit_common::ConfigError;

/// Environment variables consulted for the API key, in priority order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["SAWIT_API_KEY", "GEMINI_API_KEY"];

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path is created from the documented template if missing.
/// Out-of-range values are logged by the loader and kept; only a missing
/// or unparsable file is an error. Environment overrides apply last.
pub fn load_config(path: Option<&Path>) -> Result<SawitConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides<F>(config: &mut SawitConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for name in API_KEY_ENV_VARS {
        if let Some(key) = lookup(name).filter(|k| !k.trim().is_empty()) {
            tracing::debug!("api key taken from {name}");
            config.api.api_key = key;
            return;
        }
    }
}

/// Serialize a config to a pretty-printed JSON string with the key redacted.
pub fn config_to_json(config: &SawitConfig) -> String {
    let mut redacted = config.clone();
    if redacted.api.is_configured() {
        redacted.api.api_key = "[REDACTED]".into();
    }
    serde_json::to_string_pretty(&redacted)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
