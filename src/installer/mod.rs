//! Pack installation for Minecraft targets
//!
//! This module handles:
//! - Resolving where a pack type installs ([`target`])
//! - Reading and rewriting the per-kind install manifests ([`manifest`])
//! - Install, remove and listing transitions, with a confirmation prompt on conflicts
//!
//! Every transition computes the new manifest in memory and writes it once.
//! Artifacts are written before the manifest that references them, and
//! artifacts no longer referenced are deleted after it.

pub mod confirm;
pub mod manifest;
pub mod target;


use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::fs::{copy_atomic, write_atomic};
use crate::error::Result;
use crate::error::install::{missing_artifact, not_installed};
use crate::pack::{Pack, PackSet, PackType};

pub use confirm::{Confirm, PromptConfirm};

/// Where the archive for an install comes from
#[derive(Debug, Clone, Copy)]
pub enum ArchiveSource<'a> {
    Bytes(&'a [u8]),
    #[allow(dead_code)] // Used in tests
    Path(&'a Path),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// The user declined to replace an installed pack
    Skipped,
}

pub struct InstallManager {
    confirm: Box<dyn Confirm>,
    resource_dir: PathBuf,
}

impl InstallManager {
    /// `resource_dir` is the fixed target for resource packs
    pub fn new(confirm: Box<dyn Confirm>, resource_dir: PathBuf) -> Self {
        Self {
            confirm,
            resource_dir,
        }
    }

    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Ask through the injected confirmation
    pub fn ask(&self, question: &str) -> Result<bool> {
        self.confirm.confirm(question)
    }

    /// Install one pack archive into `target` as `{id}.{version}.zip`
    ///
    /// Replacing an installed pack asks first unless `force` is set.
    pub fn install(
        &self,
        archive: ArchiveSource<'_>,
        target: &Path,
        pack: &Pack,
        force: bool,
    ) -> Result<InstallOutcome> {
        let manifest_path = manifest::manifest_path(target, pack.pack_type);
        let current = manifest::load(&manifest_path)?;
        let id = pack.id();

        if current.contains(&id) && !force {
            let question = format!("{} ({id}) is already installed. Replace?", pack.display);
            if !self.confirm.confirm(&question)? {
                info!("Keeping installed {id}");
                return Ok(InstallOutcome::Skipped);
            }
        }

        let artifact = target.join(pack.artifact_name());
        write_archive(archive, &artifact)?;

        let mut installed = pack.clone();
        installed.installed_path = Some(artifact);
        let mut updated = current.clone();
        updated.set(installed);
        manifest::save(&manifest_path, &updated)?;
        prune_superseded(&current, &updated);

        info!("Installed {} v.{}", pack.display, pack.version);
        Ok(InstallOutcome::Installed)
    }

    /// Install one archive that carries every pack of `pack_type` in `packs`
    ///
    /// Asks once when any of them is already installed, unless `force` is set.
    pub fn install_group(
        &self,
        archive: ArchiveSource<'_>,
        target: &Path,
        packs: &PackSet,
        pack_type: PackType,
        force: bool,
    ) -> Result<InstallOutcome> {
        let packs = packs.filter_by_type(&[pack_type]);
        if packs.is_empty() {
            debug!("No {} packs to install", pack_type.kind());
            return Ok(InstallOutcome::Skipped);
        }

        let manifest_path = manifest::manifest_path(target, pack_type);
        let current = manifest::load(&manifest_path)?;

        let conflicts: Vec<&str> = packs.ids().filter(|id| current.contains(id)).collect();
        if !conflicts.is_empty() && !force {
            let question = format!("{} already installed. Replace?", conflicts.join(", "));
            if !self.confirm.confirm(&question)? {
                info!("Keeping installed {}", pack_type.kind());
                return Ok(InstallOutcome::Skipped);
            }
        }

        let artifact = target.join(group_artifact_name(pack_type, &packs));
        write_archive(archive, &artifact)?;

        let mut updated = current.clone();
        for mut pack in packs.iter().cloned() {
            pack.installed_path = Some(artifact.clone());
            updated.set(pack);
        }
        manifest::save(&manifest_path, &updated)?;
        prune_superseded(&current, &updated);

        for pack in packs.iter() {
            info!("Installed {} v.{}", pack.display, pack.version);
        }
        Ok(InstallOutcome::Installed)
    }

    /// Remove an installed pack from `target`
    ///
    /// On error the manifest is left untouched.
    pub fn remove(&self, pack: &Pack, target: &Path) -> Result<()> {
        let manifest_path = manifest::manifest_path(target, pack.pack_type);
        let current = manifest::load(&manifest_path)?;
        let id = pack.id();

        let installed = current.get(&id).ok_or_else(|| not_installed(&id))?;
        if !installed.is_installed() {
            return Err(missing_artifact(&id));
        }

        let mut updated = current.clone();
        updated.remove(&id);
        manifest::save(&manifest_path, &updated)?;
        prune_superseded(&current, &updated);

        info!("Removed {} v.{}", installed.display, installed.version);
        if let Some(path) = installed.installed_path.as_deref() {
            let sharing = sharing_ids(&updated, path);
            if !sharing.is_empty() {
                warn!(
                    "'{}' still contains {} until {} is removed",
                    path.display(),
                    installed.display,
                    sharing.join(", ")
                );
            }
        }
        Ok(())
    }

    /// Installed packs of one kind in `target`
    pub fn installed_in(&self, target: &Path, pack_type: PackType) -> Result<PackSet> {
        manifest::load(&manifest::manifest_path(target, pack_type))
    }

    /// Every installed pack: data packs and crafting tweaks of the datapacks
    /// directory `target` (when given) plus the resource packs
    pub fn list_installed(&self, target: Option<&Path>) -> Result<PackSet> {
        let mut installed = PackSet::new();
        if let Some(target) = target {
            installed.union(self.installed_in(target, PackType::Data)?);
            installed.union(self.installed_in(target, PackType::Crafting)?);
        }
        installed.union(self.installed_in(&self.resource_dir, PackType::Resource)?);
        Ok(installed)
    }
}

/// Artifact name for an archive shared by several packs
pub fn group_artifact_name(pack_type: PackType, packs: &PackSet) -> String {
    // PackSet iterates in id order
    let ids: Vec<&str> = packs.ids().collect();
    let digest = blake3::hash(ids.join("\n").as_bytes()).to_hex();
    format!("{pack_type}.Group.{}.zip", &digest.as_str()[..8])
}

/// Ids in `packs` whose artifact is `path`
fn sharing_ids<'a>(packs: &'a PackSet, path: &Path) -> Vec<&'a str> {
    packs
        .ids()
        .filter(|id| packs.get(id).and_then(|pack| pack.installed_path.as_deref()) == Some(path))
        .collect()
}

fn write_archive(archive: ArchiveSource<'_>, destination: &Path) -> Result<()> {
    debug!("Writing '{}'", destination.display());
    match archive {
        ArchiveSource::Bytes(bytes) => write_atomic(destination, bytes),
        ArchiveSource::Path(path) => copy_atomic(path, destination),
    }
}

/// Delete artifacts `before` referenced that `after` no longer does
fn prune_superseded(before: &PackSet, after: &PackSet) {
    let kept: BTreeSet<&Path> = after
        .iter()
        .filter_map(|pack| pack.installed_path.as_deref())
        .collect();
    let stale: BTreeSet<&Path> = before
        .iter()
        .filter_map(|pack| pack.installed_path.as_deref())
        .filter(|path| !kept.contains(path))
        .collect();

    for path in stale {
        match fs::remove_file(path) {
            Ok(()) => debug!("Deleted '{}'", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Could not delete '{}': {e}", path.display()),
        }
    }
}
