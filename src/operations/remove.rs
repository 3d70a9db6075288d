//! Remove operation

use crate::error::Result;
use crate::error::install::not_installed;
use crate::operations::Session;
use crate::pack::PackSet;
use crate::resolver::Resolver;

/// Remove installed packs named by id or remote name
///
/// Every name is resolved before anything is removed, so an unknown name
/// leaves all manifests untouched.
pub fn run(session: &mut Session, terms: &[String]) -> Result<()> {
    let world = session.optional_world_target()?;
    let installed = session.installer.list_installed(world.as_deref())?;
    let resolver = Resolver::new(&installed);

    // Keyed by id, so aliases of one pack remove it once
    let mut packs = PackSet::new();
    for term in terms {
        match resolver.find(term) {
            Some(pack) => packs.set(pack.clone()),
            None => {
                // Outside a world only resource packs are visible
                if world.is_none() {
                    session.world_target()?;
                }
                return Err(not_installed(term));
            }
        }
    }

    for pack in packs.iter() {
        let target = session.target_for(pack.pack_type)?;
        session.installer.remove(pack, &target)?;
    }
    Ok(())
}
