//! Catalog store
//!
//! Keeps a durable, mergeable cache of what the remote catalog offers. A
//! refresh unions the freshly parsed documents on top of the cached set, so
//! packs missing from a new response survive until the ids are reused.
//!
//! The in-memory copy lives as long as the store, which is one command
//! invocation. There is no staleness check beyond "the cache file exists".

pub mod document;

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::common::fs::{read_optional, write_atomic};
use crate::config::{Settings, paths};
use crate::error::catalog::{fetch_failed, parse_failed};
use crate::error::Result;
use crate::pack::{PackSet, PackType};
use crate::remote::Transport;
use document::CatalogDocument;

/// One remote catalog document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSource {
    pub pack_type: PackType,
    pub url: String,
}

pub struct CatalogStore {
    path: PathBuf,
    sources: Vec<CatalogSource>,
    transport: Rc<dyn Transport>,
    cached: Option<PackSet>,
}

impl CatalogStore {
    pub fn new(path: PathBuf, sources: Vec<CatalogSource>, transport: Rc<dyn Transport>) -> Self {
        Self {
            path,
            sources,
            transport,
            cached: None,
        }
    }

    /// Store at `<config dir>/packdb.json` with the sources enabled in `settings`
    pub fn from_settings(settings: &Settings, transport: Rc<dyn Transport>) -> Result<Self> {
        let path = paths::config_dir()?.join(paths::CATALOG_FILE);
        Ok(Self::new(path, sources_for(settings), transport))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fetch every source, merge on top of the cache file and rewrite it
    pub fn refresh(&mut self) -> Result<&PackSet> {
        let set = self.fetch_and_store()?;
        Ok(self.cached.insert(set))
    }

    /// The catalog for this invocation
    ///
    /// Reads the cache file once; when there is none, refreshes instead of
    /// returning an empty catalog.
    pub fn load(&mut self) -> Result<&PackSet> {
        let set = match self.cached.take() {
            Some(set) => set,
            None => match self.read_cache()? {
                Some(set) => set,
                None => {
                    warn!("Can't find a locally stored catalog. Attempting to fetch now...");
                    self.fetch_and_store()?
                }
            },
        };
        Ok(self.cached.insert(set))
    }

    fn read_cache(&self) -> Result<Option<PackSet>> {
        let Some(bytes) = read_optional(&self.path)? else {
            return Ok(None);
        };
        debug!("Reading catalog cache '{}'", self.path.display());
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| parse_failed(self.path.display().to_string(), e))
    }

    fn fetch_and_store(&self) -> Result<PackSet> {
        let mut merged = match self.read_cache() {
            Ok(cached) => cached.unwrap_or_default(),
            Err(e) => {
                warn!("Ignoring unreadable catalog cache: {e}");
                PackSet::new()
            }
        };

        for source in &self.sources {
            let label = format!("Downloading {} metadata", source.pack_type.kind());
            let payload = self
                .transport
                .get(&source.url, &label)
                .map_err(|e| fetch_failed(&source.url, e))?;
            if !payload.length_matches() {
                warn!("Download of '{}' was shorter than announced", source.url);
            }

            let fresh = CatalogDocument::parse(&payload.bytes, &source.url)?
                .into_pack_set(source.pack_type);
            debug!("Parsed {} packs from '{}'", fresh.len(), source.url);
            merged.union(fresh);
        }

        let json = serde_json::to_vec_pretty(&merged)
            .map_err(|e| parse_failed(self.path.display().to_string(), e))?;
        write_atomic(&self.path, &json)?;
        info!("Fetch complete");
        Ok(merged)
    }
}

/// Catalog documents to fetch for the given settings
pub fn sources_for(settings: &Settings) -> Vec<CatalogSource> {
    settings
        .catalog_types()
        .into_iter()
        .map(|pack_type| CatalogSource {
            pack_type,
            url: settings.catalog_url(pack_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::McpkgError;
    use crate::pack::Pack;
    use crate::test_fixtures::{FakeTransport, catalog_document, create_temp_dir};

    const DP_URL: &str = "http://catalog.test/dp.json";
    const CT_URL: &str = "http://catalog.test/ct.json";

    fn sources() -> Vec<CatalogSource> {
        vec![
            CatalogSource {
                pack_type: PackType::Data,
                url: DP_URL.to_string(),
            },
            CatalogSource {
                pack_type: PackType::Crafting,
                url: CT_URL.to_string(),
            },
        ]
    }

    fn transport(dp_version: &str) -> Rc<FakeTransport> {
        Rc::new(
            FakeTransport::new()
                .with_get(
                    DP_URL,
                    catalog_document("survival", &[("graves", "Graves", dp_version)]),
                )
                .with_get(
                    CT_URL,
                    catalog_document("craftables", &[("double slabs", "Double Slabs", "1.0.0")]),
                ),
        )
    }

    #[test]
    fn test_refresh_unions_both_documents_and_writes_cache() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        let mut store = CatalogStore::new(path.clone(), sources(), transport("1.0.0"));

        let set = store.refresh().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Data.Graves").unwrap().pack_type, PackType::Data);
        assert_eq!(
            set.get("Crafting.DoubleSlabs").unwrap().pack_type,
            PackType::Crafting
        );

        let on_disk: PackSet = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(&on_disk, set);
    }

    #[test]
    fn test_refresh_preserves_cached_entries_and_overrides_by_id() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        let stale: PackSet = [
            Pack::new(PackType::Data, "graves", "Graves", "survival").with_version("0.9.0"),
            Pack::new(PackType::Data, "retired pack", "Retired", "old").with_version("1.0.0"),
        ]
        .into_iter()
        .collect();
        std::fs::write(&path, serde_json::to_vec(&stale).unwrap()).unwrap();

        let mut store = CatalogStore::new(path, sources(), transport("2.0.0"));
        let set = store.refresh().unwrap();
        assert_eq!(set.get("Data.Graves").unwrap().version, "2.0.0");
        assert!(set.contains("Data.RetiredPack"));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        let mut store = CatalogStore::new(path, sources(), transport("1.0.0"));
        let first = store.refresh().unwrap().clone();
        let second = store.refresh().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_fetch_failure_leaves_cache_untouched() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        std::fs::write(&path, b"[]").unwrap();
        let partial = Rc::new(FakeTransport::new().with_get(
            DP_URL,
            catalog_document("survival", &[("graves", "Graves", "1.0.0")]),
        ));
        let mut store = CatalogStore::new(path.clone(), sources(), partial);

        let err = store.refresh().unwrap_err();
        assert!(matches!(err, McpkgError::CatalogFetchFailed { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), b"[]");
    }

    #[test]
    fn test_refresh_schema_mismatch_is_parse_error() {
        let temp = create_temp_dir();
        let bad = Rc::new(
            FakeTransport::new()
                .with_get(DP_URL, r#"{"packs": []}"#)
                .with_get(CT_URL, r#"{"categories": []}"#),
        );
        let mut store = CatalogStore::new(temp.path().join("packdb.json"), sources(), bad);
        let err = store.refresh().unwrap_err();
        assert!(matches!(err, McpkgError::CatalogParseFailed { .. }));
    }

    #[test]
    fn test_load_bootstraps_once_when_cache_missing() {
        let temp = create_temp_dir();
        let fake = transport("1.0.0");
        let mut store = CatalogStore::new(temp.path().join("packdb.json"), sources(), fake.clone());

        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(fake.requests().len(), 2);
    }

    #[test]
    fn test_load_reads_existing_cache_without_network() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        let cached: PackSet = [Pack::new(PackType::Data, "graves", "Graves", "survival")]
            .into_iter()
            .collect();
        std::fs::write(&path, serde_json::to_vec(&cached).unwrap()).unwrap();

        let fake = Rc::new(FakeTransport::new());
        let mut store = CatalogStore::new(path, sources(), fake.clone());
        assert_eq!(store.load().unwrap(), &cached);
        assert!(fake.requests().is_empty());
    }

    #[test]
    fn test_load_corrupt_cache_is_parse_error() {
        let temp = create_temp_dir();
        let path = temp.path().join("packdb.json");
        std::fs::write(&path, br#"[{"remote_name": "x"}]"#).unwrap();
        let mut store = CatalogStore::new(path, sources(), Rc::new(FakeTransport::new()));
        let err = store.load().unwrap_err();
        assert!(matches!(err, McpkgError::CatalogParseFailed { .. }));
    }

    #[test]
    fn test_sources_for_settings() {
        let settings = Settings {
            resource_packs: true,
            ..Settings::default()
        };
        let sources = sources_for(&settings);
        assert_eq!(sources.len(), 3);
        assert!(sources[2].url.ends_with("rpcategories.json"));
    }
}
