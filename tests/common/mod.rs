//! Common test utilities for mcpkg integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Host nothing listens on; any network call fails fast
pub const UNREACHABLE_HOST: &str = "http://127.0.0.1:9/";

/// Isolated config and game directories for one test
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
    pub config_dir: PathBuf,
    pub minecraft_dir: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a workspace with a config pointing at an unreachable catalog host
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let config_dir = path.join("config");
        let minecraft_dir = path.join("minecraft");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        std::fs::create_dir_all(minecraft_dir.join("resourcepacks"))
            .expect("Failed to create minecraft dir");
        std::fs::write(
            config_dir.join("config.yaml"),
            format!("catalog_host: \"{UNREACHABLE_HOST}\"\n"),
        )
        .expect("Failed to write config");

        Self {
            temp,
            path,
            config_dir,
            minecraft_dir,
        }
    }

    /// Workspace with a locally stored catalog
    pub fn with_catalog() -> Self {
        let workspace = Self::new();
        workspace.write_catalog(&[
            pack("Data", "graves", "Graves", "survival", "2.0.0", None),
            pack("Data", "afk display", "AFK Display", "utility", "1.1.0", None),
            pack(
                "Crafting",
                "double slabs",
                "Double Slabs",
                "craftables",
                "1.0.0",
                None,
            ),
        ]);
        workspace
    }

    pub fn write_catalog(&self, packs: &[Value]) {
        std::fs::write(
            self.config_dir.join("packdb.json"),
            serde_json::to_vec_pretty(packs).expect("Failed to encode catalog"),
        )
        .expect("Failed to write catalog");
    }

    /// Create a world folder named `name` under the workspace root
    pub fn create_world(&self, name: &str) -> PathBuf {
        let world = self.path.join(name);
        for entry in [
            "advancements",
            "data",
            "datapacks",
            "playerdata",
            "region",
            "stats",
        ] {
            std::fs::create_dir_all(world.join(entry)).expect("Failed to create world dir");
        }
        std::fs::write(world.join("level.dat"), b"").expect("Failed to write level.dat");
        world
    }

    /// Record `display` as an installed data pack of `world`, with its artifact on disk
    pub fn install_datapack(&self, world: &Path, remote_name: &str, display: &str, version: &str) {
        let datapacks = world.join("datapacks");
        let id = format!("Data.{}", display.replace(' ', ""));
        let artifact = datapacks.join(format!("{id}.{version}.zip"));
        std::fs::write(&artifact, b"zip").expect("Failed to write artifact");

        let manifest = datapacks.join(".datapacks.json");
        let mut packs: Vec<Value> = std::fs::read(&manifest)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();
        packs.push(pack(
            "Data",
            remote_name,
            display,
            "survival",
            version,
            Some(&artifact),
        ));
        std::fs::write(&manifest, serde_json::to_vec_pretty(&packs).expect("encode"))
            .expect("Failed to write manifest");
    }

    pub fn read_file(&self, path: &Path) -> Vec<u8> {
        std::fs::read(path).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// One pack as stored in the catalog cache or a manifest
#[allow(dead_code)]
pub fn pack(
    pack_type: &str,
    remote_name: &str,
    display: &str,
    category: &str,
    version: &str,
    installed_path: Option<&Path>,
) -> Value {
    json!({
        "remote_name": remote_name,
        "display": display,
        "pack_type": pack_type,
        "category": category,
        "version": version,
        "description": format!("{display} description"),
        "tags": [category],
        "installed_path": installed_path,
    })
}

/// mcpkg command isolated to the workspace's config and game directories
#[allow(dead_code)]
pub fn mcpkg_cmd(workspace: &TestWorkspace) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("mcpkg").expect("Failed to find mcpkg binary");
    cmd.env_remove("MCPKG_PATH")
        .env("MCPKG_CONFIG_DIR", &workspace.config_dir)
        .env("MCPKG_MINECRAFT_DIR", &workspace.minecraft_dir)
        .env("NO_COLOR", "1")
        .current_dir(&workspace.path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.config_dir.join("config.yaml").exists());
        assert!(workspace.minecraft_dir.join("resourcepacks").is_dir());
    }

    #[test]
    fn test_workspace_install_datapack() {
        let workspace = TestWorkspace::new();
        let world = workspace.create_world("world");
        workspace.install_datapack(&world, "graves", "Graves", "1.0.0");
        assert!(workspace.file_exists(&world.join("datapacks/Data.Graves.1.0.0.zip")));
        assert!(workspace.file_exists(&world.join("datapacks/.datapacks.json")));
    }
}
