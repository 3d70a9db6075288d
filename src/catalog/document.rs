//! Schema of the remote catalog documents
//!
//! ```json
//! { "categories": [ { "category": "survival",
//!                     "packs": [ { "name": "graves", "display": "Graves",
//!                                  "version": "1.0.0", "description": "..." } ] } ] }
//! ```
//!
//! Fields the tool does not use (`incompatible`, `video`, ...) are ignored.

use serde::Deserialize;

use crate::error::Result;
use crate::error::catalog::parse_failed;
use crate::pack::{Pack, PackSet, PackType, UNKNOWN_VERSION};

#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub category: String,
    pub packs: Vec<RemotePack>,
}

#[derive(Debug, Deserialize)]
pub struct RemotePack {
    pub name: String,
    pub display: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogDocument {
    /// Parse a document; `origin` names it in errors
    pub fn parse(bytes: &[u8], origin: &str) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| parse_failed(origin, e))
    }

    /// Tag every pack with `pack_type` and key it by formal id
    pub fn into_pack_set(self, pack_type: PackType) -> PackSet {
        self.categories
            .into_iter()
            .flat_map(|category| {
                let name = category.category;
                category.packs.into_iter().map(move |remote| {
                    let mut pack = Pack::new(pack_type, remote.name, remote.display, name.clone())
                        .with_version(
                            remote
                                .version
                                .filter(|v| !v.trim().is_empty())
                                .unwrap_or_else(|| UNKNOWN_VERSION.to_string()),
                        );
                    pack.description = remote.description;
                    pack
                })
            })
            .collect()
    }
}
