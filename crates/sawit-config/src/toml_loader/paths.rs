//! Where the config file lives, and writing the first one.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use sawit_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "sawit";
const FILE_NAME: &str = "config.toml";

/// `<config_dir>/sawit/config.toml` under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_in(&dir))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

pub(crate) fn config_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Write the commented template to `path`.
///
/// Never overwrites: if another process created the file first, that file
/// is left alone.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let io_err = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("{what} {}: {e}", path.display()))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err("cannot create directory for", e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(()),
        Err(e) => return Err(io_err("cannot create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| io_err("cannot write", e))?;

    info!(path = %path.display(), "wrote default chat config");
    Ok(())
}
