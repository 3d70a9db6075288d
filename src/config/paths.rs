//! Filesystem locations used by mcpkg
//!
//! The config directory holds `config.yaml` and the catalog cache. Both it and
//! the game directory can be overridden through environment variables.

use std::path::PathBuf;

use crate::error::{McpkgError, Result};

/// Directory name under the platform config directory
const CONFIG_DIR: &str = "mcpkg";

/// Settings file inside the config directory
pub const SETTINGS_FILE: &str = "config.yaml";

/// Catalog cache file inside the config directory
pub const CATALOG_FILE: &str = "packdb.json";

/// Resource pack folder inside the game directory
pub const RESOURCE_PACKS_DIR: &str = "resourcepacks";

pub const CONFIG_DIR_ENV: &str = "MCPKG_CONFIG_DIR";
pub const MINECRAFT_DIR_ENV: &str = "MCPKG_MINECRAFT_DIR";

/// Get the config directory path
///
/// Uses `MCPKG_CONFIG_DIR` when set, otherwise the platform's standard config
/// location (XDG on Linux, Application Support on macOS, AppData on Windows).
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::config_dir().ok_or_else(|| McpkgError::IoError {
        message: "Could not determine config directory".to_string(),
    })?;

    Ok(base.join(CONFIG_DIR))
}

/// Platform default game directory
pub fn default_minecraft_dir() -> Result<PathBuf> {
    let missing = || McpkgError::IoError {
        message: "Could not determine the Minecraft directory".to_string(),
    };

    if cfg!(target_os = "windows") {
        Ok(dirs::config_dir().ok_or_else(missing)?.join(".minecraft"))
    } else if cfg!(target_os = "macos") {
        Ok(dirs::data_dir().ok_or_else(missing)?.join("minecraft"))
    } else {
        Ok(dirs::home_dir().ok_or_else(missing)?.join(".minecraft"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        let temp = tempfile::TempDir::new().unwrap();
        // SAFETY: serialised with every other test that touches this variable
        unsafe { std::env::set_var(CONFIG_DIR_ENV, temp.path()) };
        let dir = config_dir().unwrap();
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
        assert_eq!(dir, temp.path());
    }

    #[test]
    #[serial]
    fn test_config_dir_default_ends_with_mcpkg() {
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };
        if let Ok(dir) = config_dir() {
            assert!(dir.ends_with(CONFIG_DIR));
        }
    }
}
