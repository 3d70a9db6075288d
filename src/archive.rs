//! Zip archive inspection
//!
//! Data pack downloads arrive as one zip holding a zip per pack; crafting
//! tweak and resource pack downloads are a single pack zip.

use std::io::{Cursor, Read};
use std::sync::LazyLock;

use regex::Regex;
use zip::ZipArchive;

use crate::common::fs::capacity_hint;
use crate::error::Result;

/// Inner archive names look like `multiplayer sleep v2.1.0 (MC 1.16)`
#[allow(clippy::expect_used)]
static BUNDLED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.*) v(?P<version>\d+\.\d+\.\d+).*$").expect("static regex is valid")
});

/// A zip nested inside another zip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedArchive {
    /// Entry path inside the outer archive
    pub path: String,
    pub bytes: Vec<u8>,
}

impl NestedArchive {
    /// File name without directories or the `.zip` extension
    pub fn stem(&self) -> &str {
        let file_name = self.path.rsplit('/').next().unwrap_or(&self.path);
        file_name.strip_suffix(".zip").unwrap_or(file_name)
    }
}

/// List the file paths inside an archive
pub fn entry_names(bytes: &[u8]) -> Result<Vec<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        if entry.is_file() {
            names.push(entry.name().to_string());
        }
    }
    Ok(names)
}

/// Extract every `.zip` entry of an archive
pub fn unzip_nested(bytes: &[u8]) -> Result<Vec<NestedArchive>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut nested = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if !entry.is_file() || !entry.name().to_ascii_lowercase().ends_with(".zip") {
            continue;
        }
        let path = entry.name().to_string();
        let mut inner = Vec::with_capacity(capacity_hint(Some(entry.size())));
        entry.read_to_end(&mut inner)?;
        nested.push(NestedArchive { path, bytes: inner });
    }
    Ok(nested)
}

/// True when the archive has a `pack.mcmeta` at its root
pub fn is_pack_archive(bytes: &[u8]) -> bool {
    entry_names(bytes).is_ok_and(|names| names.iter().any(|n| n == "pack.mcmeta"))
}

/// Split an inner archive stem into `(name, version)`
pub fn parse_bundled_name(stem: &str) -> Option<(String, String)> {
    let captures = BUNDLED_NAME.captures(stem)?;
    Some((
        captures["name"].to_string(),
        captures["version"].to_string(),
    ))
}
