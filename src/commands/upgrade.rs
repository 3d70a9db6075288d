//! Upgrade command implementation

use std::path::PathBuf;

use crate::cli::UpgradeArgs;
use crate::error::Result;
use crate::operations::{Session, upgrade};

/// Run upgrade command
pub fn run(path: Option<PathBuf>, args: UpgradeArgs) -> Result<()> {
    let mut session = Session::open(path)?;
    upgrade::run(&mut session, &args.packs, args.force)
}
