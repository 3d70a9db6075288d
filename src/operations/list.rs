//! List and search operations

use tracing::{info, warn};

use crate::error::Result;
use crate::operations::Session;
use crate::operations::upgrade::outdated;
use crate::pack::{PackSet, PackType};
use crate::resolver::Resolver;
use crate::ui::display::{ListLayout, print_pack};

/// Options shared by `list` and `search`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// List installed packs instead of the catalog
    pub installed: bool,
    pub compact: bool,
    /// Restrict to these pack types; empty means all
    pub types: Vec<PackType>,
}

/// Print the catalog, or the installed packs with an out-of-date report
pub fn list(session: &mut Session, options: &ListOptions) -> Result<()> {
    let layout = layout(options.compact);
    info!("Listing packs:");

    let packs = filter(source(session, options.installed)?, &options.types);
    for pack in packs.iter() {
        print_pack(pack, &layout);
    }

    if options.installed {
        let catalog = session.catalog.load()?;
        for pack in outdated(&packs, catalog).iter() {
            warn!("{} can be updated to {}", pack.id(), pack.version);
        }
    }
    Ok(())
}

/// Print packs matching any of `patterns`
pub fn search(session: &mut Session, patterns: &[String], options: &ListOptions) -> Result<()> {
    let layout = layout(options.compact);
    info!("Searching:");

    let packs = source(session, options.installed)?;
    let hits = filter(Resolver::new(&packs).search(patterns), &options.types);
    if hits.is_empty() {
        info!("No packs matched");
    }
    for pack in hits.iter() {
        print_pack(pack, &layout);
    }
    Ok(())
}

fn layout(compact: bool) -> ListLayout {
    let layout = ListLayout::for_stdout(compact);
    if layout.forced_compact(compact) {
        warn!("Pipe detected. Using compact layout");
    }
    layout
}

fn source(session: &mut Session, installed: bool) -> Result<PackSet> {
    if installed {
        let target = session.optional_world_target()?;
        session.installer.list_installed(target.as_deref())
    } else {
        Ok(session.catalog.load()?.clone())
    }
}

fn filter(packs: PackSet, types: &[PackType]) -> PackSet {
    if types.is_empty() {
        packs
    } else {
        packs.filter_by_type(types)
    }
}
