//! Upgrade operation
//!
//! Compares installed packs against the catalog and reinstalls the ones the
//! catalog has a newer version of.

use tracing::{info, warn};

use crate::error::Result;
use crate::error::install::not_installed;
use crate::operations::Session;
use crate::operations::install::install_packs;
use crate::pack::PackSet;
use crate::resolver::Resolver;
use crate::version;

/// Catalog entries newer than what is installed
///
/// Packs the catalog does not know are ignored. A pack whose versions cannot
/// be compared is logged and skipped.
pub fn outdated(installed: &PackSet, catalog: &PackSet) -> PackSet {
    installed
        .iter()
        .filter_map(|pack| {
            let latest = catalog.get(&pack.id())?;
            match version::is_newer(&latest.version, &pack.version) {
                Ok(true) => Some(latest.clone()),
                Ok(false) => None,
                Err(e) => {
                    warn!("Skipping {}: {e}", pack.id());
                    None
                }
            }
        })
        .collect()
}

/// Upgrade the named installed packs, or all of them when `terms` is empty
///
/// Asks once before installing unless `force` is set. Upgrades always
/// replace the installed version.
pub fn run(session: &mut Session, terms: &[String], force: bool) -> Result<()> {
    let installed = session
        .installer
        .list_installed(session.optional_world_target()?.as_deref())?;

    let candidates = if terms.is_empty() {
        installed
    } else {
        let resolver = Resolver::new(&installed);
        let mut named = PackSet::new();
        for term in terms {
            let pack = resolver.find(term).ok_or_else(|| not_installed(term))?;
            named.set(pack.clone());
        }
        named
    };

    let catalog = session.catalog.load()?;
    let upgrades = outdated(&candidates, catalog);
    if upgrades.is_empty() {
        info!("Everything is up to date");
        return Ok(());
    }

    for pack in upgrades.iter() {
        let current = candidates
            .get(&pack.id())
            .map_or("?", |installed| installed.version.as_str());
        info!("{} v.{current} -> v.{}", pack.id(), pack.version);
    }

    if !force {
        let question = format!("Upgrade {} pack(s)?", upgrades.len());
        if !session.installer.ask(&question)? {
            info!("Upgrade cancelled");
            return Ok(());
        }
    }

    install_packs(session, &upgrades, true)
}
