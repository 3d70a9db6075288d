//! Update operation: refresh the local catalog

use tracing::info;

use crate::error::Result;
use crate::operations::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let count = session.catalog.refresh()?.len();
    info!("{count} packs in catalog '{}'", session.catalog.path().display());
    Ok(())
}
