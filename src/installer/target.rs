//! Install target resolution
//!
//! Data packs and crafting tweaks install into a world's `datapacks` folder.
//! The candidate directory may be a server root, a world save, or the
//! `datapacks` folder itself.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::error::install::invalid_target;

/// Entries every world save has at its root
pub const WORLD_ENTRIES: &[&str] = &[
    "advancements",
    "data",
    "datapacks",
    "level.dat",
    "playerdata",
    "region",
    "stats",
];

const DATAPACKS_DIR: &str = "datapacks";
const SERVER_EULA: &str = "eula.txt";
const SERVER_WORLD: &str = "world";

/// True when `path` looks like a world save
pub fn is_world(path: &Path) -> bool {
    path.is_dir() && WORLD_ENTRIES.iter().all(|entry| path.join(entry).exists())
}

/// True when `path` is a server root with a world in `world/`
pub fn is_server(path: &Path) -> bool {
    path.join(SERVER_EULA).is_file() && is_world(&path.join(SERVER_WORLD))
}

/// Resolve the datapacks directory for a candidate path
///
/// Tried in order: server root, world save, a `datapacks` folder inside a
/// world. Anything else is an [`InvalidTarget`](crate::error::McpkgError::InvalidTarget).
pub fn resolve_datapacks_dir(path: &Path) -> Result<PathBuf> {
    if is_server(path) {
        debug!("'{}' is a server", path.display());
        return Ok(path.join(SERVER_WORLD).join(DATAPACKS_DIR));
    }

    if is_world(path) {
        debug!("'{}' is a world", path.display());
        return Ok(path.join(DATAPACKS_DIR));
    }

    // `.` and `..` have no file name, so look at the canonical form
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let named_datapacks = canonical
        .file_name()
        .is_some_and(|name| name == DATAPACKS_DIR);
    if named_datapacks && canonical.parent().is_some_and(is_world) {
        debug!("'{}' is a world's datapacks folder", path.display());
        return Ok(path.to_path_buf());
    }

    Err(invalid_target(path))
}
