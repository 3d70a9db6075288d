//! User configuration (`config.yaml`)
//!
//! Every field is optional in the file; missing fields take the defaults
//! below. A missing file is the same as an empty one.

pub mod paths;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{McpkgError, Result};
use crate::pack::PackType;

const DEFAULT_GAME_VERSION: &str = "1.16";
const DEFAULT_CATALOG_HOST: &str = "https://vanillatweaks.net/";

/// Settings for one mcpkg invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base game version the catalog is requested for
    pub game_version: String,
    pub catalog_host: String,
    /// Overrides the platform default game directory
    pub minecraft_dir: Option<PathBuf>,
    /// Also fetch the resource pack catalog on refresh
    pub resource_packs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            game_version: DEFAULT_GAME_VERSION.to_string(),
            catalog_host: DEFAULT_CATALOG_HOST.to_string(),
            minecraft_dir: None,
            resource_packs: false,
        }
    }
}

impl Settings {
    /// Load `config.yaml` from the config directory
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_dir()?.join(paths::SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| crate::error::fs::read_failed(path, e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            McpkgError::ConfigParseFailed { reason, .. } => McpkgError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| McpkgError::ConfigParseFailed {
            path: paths::SETTINGS_FILE.to_string(),
            reason: e.to_string(),
        })
    }

    /// Game directory: `MCPKG_MINECRAFT_DIR`, then `minecraft_dir`, then the platform default
    pub fn minecraft_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(paths::MINECRAFT_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        match &self.minecraft_dir {
            Some(dir) => Ok(dir.clone()),
            None => paths::default_minecraft_dir(),
        }
    }

    /// Fixed install target for resource packs
    pub fn resource_packs_dir(&self) -> Result<PathBuf> {
        Ok(self.minecraft_dir()?.join(paths::RESOURCE_PACKS_DIR))
    }

    /// Pack types whose catalog documents are fetched on refresh
    pub fn catalog_types(&self) -> Vec<PackType> {
        let mut types = vec![PackType::Data, PackType::Crafting];
        if self.resource_packs {
            types.push(PackType::Resource);
        }
        types
    }

    /// URL of the remote catalog document for a pack type
    pub fn catalog_url(&self, pack_type: PackType) -> String {
        self.endpoint(&format!(
            "assets/resources/json/{}/{}categories.json",
            self.game_version,
            pack_type.catalog_prefix()
        ))
    }

    /// URL of the download-link service for a pack type
    pub fn download_service_url(&self, pack_type: PackType) -> String {
        self.endpoint(&format!("assets/server/zip{}.php", pack_type.kind()))
    }

    /// Join a path relative to the catalog host
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.catalog_host.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
