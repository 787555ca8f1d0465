use std::fs;
use std::path::PathBuf;

use sawit_common::PlatformError;

const APP_NAME: &str = "sawit";

/// Returns the platform-specific configuration directory for Sawit.
///
/// - macOS: `~/Library/Application Support/sawit`
/// - Linux: `$XDG_CONFIG_HOME/sawit` (defaults to `~/.config/sawit`)
/// - Windows: `%APPDATA%\sawit`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Returns the platform-specific data directory for Sawit.
///
/// - macOS: `~/Library/Application Support/sawit`
/// - Linux: `$XDG_DATA_HOME/sawit` (defaults to `~/.local/share/sawit`)
/// - Windows: `%APPDATA%\sawit`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// Returns the directory holding the persisted chat logs.
///
/// Located at `data_dir()/storage`.
pub fn storage_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("storage"))
}

/// Creates the Sawit directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), std::io::Error> {
    for dir in [config_dir(), storage_dir()] {
        let dir = dir.map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
