//! Per-kind install manifests
//!
//! Each target directory holds one dotfile per pack type (`.datapacks.json`,
//! `.craftingtweaks.json`, `.resourcepacks.json`) listing what mcpkg
//! installed there. A missing manifest is an empty one.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::fs::{read_optional, write_atomic};
use crate::error::Result;
use crate::error::install::manifest_parse_failed;
use crate::pack::{PackSet, PackType};

/// Manifest file for `pack_type` inside `dir`
pub fn manifest_path(dir: &Path, pack_type: PackType) -> PathBuf {
    dir.join(format!(".{}.json", pack_type.kind()))
}

pub fn load(path: &Path) -> Result<PackSet> {
    let Some(bytes) = read_optional(path)? else {
        debug!("No manifest at '{}'", path.display());
        return Ok(PackSet::new());
    };
    serde_json::from_slice(&bytes).map_err(|e| manifest_parse_failed(path, e))
}

/// Replace the manifest with `packs` in a single write
pub fn save(path: &Path, packs: &PackSet) -> Result<()> {
    let json = serde_json::to_vec_pretty(packs).map_err(|e| manifest_parse_failed(path, e))?;
    write_atomic(path, &json)
}
