//! Install operation
//!
//! Resolves the requested packs in the catalog, asks the download-link
//! service for their archives and hands each archive to the install manager.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::archive::{NestedArchive, is_pack_archive, parse_bundled_name, unzip_nested};
use crate::error::{McpkgError, Result};
use crate::installer::{ArchiveSource, InstallManager};
use crate::operations::Session;
use crate::pack::{Pack, PackSet, PackType, UNKNOWN_VERSION, formal_id};
use crate::resolver::{PlannedDownload, Resolver, build_download_request, request_download_link};

/// Category given to packs the catalog does not know
pub const UNMANAGED_CATEGORY: &str = "unmanaged";

/// Install the packs named by `terms` (ids or remote names)
///
/// Unknown names are skipped with a warning; nothing known at all is an error.
pub fn run(session: &mut Session, terms: &[String], force: bool) -> Result<()> {
    let catalog = session.catalog.load()?;
    let resolver = Resolver::new(catalog);

    let mut selected = PackSet::new();
    for term in terms {
        match resolver.find(term) {
            Some(pack) => selected.set(pack.clone()),
            None => warn!("Pack '{term}' was not found in the catalog"),
        }
    }

    if selected.is_empty() {
        return Err(McpkgError::PackNotFound {
            term: terms.join(", "),
        });
    }

    install_packs(session, &selected, force)
}

/// Download and install `packs`, batched per [`build_download_request`]
pub fn install_packs(session: &Session, packs: &PackSet, force: bool) -> Result<()> {
    let plan = build_download_request(packs);

    // Resolve every target before touching the network
    let mut work: Vec<(PackType, PathBuf, Vec<PlannedDownload>)> = Vec::new();
    for (pack_type, downloads) in plan {
        work.push((pack_type, session.target_for(pack_type)?, downloads));
    }

    info!("Getting pack metadata...");
    for (pack_type, target, downloads) in work {
        for download in downloads {
            let link = request_download_link(
                session.transport.as_ref(),
                &session.settings,
                &download.request,
            )?;
            debug!("Got '{link}'");

            let payload = session
                .transport
                .get(&link, &format!("Downloading {}", pack_type.kind()))?;
            if !payload.length_matches() {
                warn!("Download of '{link}' was shorter than announced");
            }

            let archive = ArchiveSource::Bytes(&payload.bytes);
            match pack_type {
                PackType::Data => {
                    install_datapacks(
                        &session.installer,
                        &payload.bytes,
                        &target,
                        &download.packs,
                        force,
                    )?;
                }
                PackType::Crafting => {
                    for pack in download.packs.iter() {
                        session.installer.install(archive, &target, pack, force)?;
                    }
                }
                PackType::Resource => {
                    session
                        .installer
                        .install_group(archive, &target, &download.packs, pack_type, force)?;
                }
            }
        }
    }
    Ok(())
}

/// Install a data pack download: a zip of per-pack zips
///
/// A download without inner zips is installed as one group.
fn install_datapacks(
    installer: &InstallManager,
    bytes: &[u8],
    target: &Path,
    requested: &PackSet,
    force: bool,
) -> Result<()> {
    let nested = unzip_nested(bytes)?;
    if nested.is_empty() {
        if !is_pack_archive(bytes) {
            warn!("Data pack download has no pack.mcmeta, installing it anyway");
        }
        debug!("Data pack download holds no inner archives, installing it whole");
        installer.install_group(
            ArchiveSource::Bytes(bytes),
            target,
            requested,
            PackType::Data,
            force,
        )?;
        return Ok(());
    }

    for inner in &nested {
        let pack = match_nested(inner, requested);
        installer.install(ArchiveSource::Bytes(&inner.bytes), target, &pack, force)?;
    }
    Ok(())
}

/// The requested pack an inner archive belongs to, or an unmanaged stand-in
fn match_nested(inner: &NestedArchive, requested: &PackSet) -> Pack {
    let stem = inner.stem();
    let (name, version) = parse_bundled_name(stem)
        .unwrap_or_else(|| (stem.to_string(), UNKNOWN_VERSION.to_string()));

    if let Some(pack) = requested.get(&formal_id(PackType::Data, &name)) {
        return pack.clone();
    }
    if let Some(pack) = requested
        .iter()
        .find(|pack| pack.display == name || pack.remote_name == name)
    {
        return pack.clone();
    }

    warn!("'{stem}' does not match a requested pack, installing it as unmanaged");
    Pack::new(PackType::Data, name.clone(), name, UNMANAGED_CATEGORY).with_version(version)
}
