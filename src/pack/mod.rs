//! Pack data model
//!
//! A [`Pack`] is one installable unit. Its formal id is derived from the pack
//! type and the name the catalog publishes it under, and is the key used for
//! catalog merges and install manifests.

mod set;

pub use set::PackSet;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::McpkgError;

/// Version used when the catalog does not version a pack
pub const UNKNOWN_VERSION: &str = "0.0.0";

/// Which installation pipeline applies to a pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PackType {
    Data,
    Crafting,
    Resource,
}

impl PackType {
    pub const ALL: [PackType; 3] = [PackType::Data, PackType::Crafting, PackType::Resource];

    /// Prefix of the remote catalog document (`dp`, `ct`, `rp`)
    pub fn catalog_prefix(self) -> &'static str {
        match self {
            PackType::Data => "dp",
            PackType::Crafting => "ct",
            PackType::Resource => "rp",
        }
    }

    /// Plural kind name used by the download service and manifest files
    pub fn kind(self) -> &'static str {
        match self {
            PackType::Data => "datapacks",
            PackType::Crafting => "craftingtweaks",
            PackType::Resource => "resourcepacks",
        }
    }
}

impl fmt::Display for PackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackType::Data => "Data",
            PackType::Crafting => "Crafting",
            PackType::Resource => "Resource",
        };
        f.write_str(name)
    }
}

impl FromStr for PackType {
    type Err = McpkgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "data" | "datapack" | "datapacks" | "dp" => Ok(PackType::Data),
            "crafting" | "craftingtweak" | "craftingtweaks" | "ct" => Ok(PackType::Crafting),
            "resource" | "resourcepack" | "resourcepacks" | "rp" => Ok(PackType::Resource),
            _ => Err(McpkgError::PackTypeUnsupported {
                pack_type: s.to_string(),
            }),
        }
    }
}

fn default_version() -> String {
    UNKNOWN_VERSION.to_string()
}

/// One add-on unit, either known from the catalog or recorded in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// Name as published by the catalog (may contain spaces)
    pub remote_name: String,
    pub display: String,
    pub pack_type: PackType,
    /// Catalog grouping, needed to build download requests
    pub category: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Set once the pack has been installed
    #[serde(default)]
    pub installed_path: Option<PathBuf>,
}

impl Pack {
    /// Create a catalog pack; tags are derived from the category
    pub fn new(
        pack_type: PackType,
        remote_name: impl Into<String>,
        display: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let category = category.into();
        Self {
            remote_name: remote_name.into(),
            display: display.into(),
            pack_type,
            tags: Some(vec![category.clone()]),
            category,
            version: default_version(),
            description: None,
            installed_path: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The formal id, see [`formal_id`]
    pub fn id(&self) -> String {
        formal_id(self.pack_type, &self.remote_name)
    }

    pub fn is_installed(&self) -> bool {
        self.installed_path.is_some()
    }

    /// Deterministic artifact file name: `{id}.{version}.zip`
    pub fn artifact_name(&self) -> String {
        format!("{}.{}.zip", self.id(), self.version)
    }
}

/// `"{pack_type}.{titlecase(remote_name) without spaces}"`
///
/// Depends on nothing but its arguments, so ids stay stable across catalog
/// refreshes and version bumps.
pub fn formal_id(pack_type: PackType, remote_name: &str) -> String {
    let name: String = titlecase(remote_name)
        .chars()
        .filter(|c| *c != ' ')
        .collect();
    format!("{pack_type}.{name}")
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest
fn titlecase(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
