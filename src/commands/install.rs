//! Install command implementation
//!
//! Looks the requested packs up in the local catalog (fetching it first when
//! there is none) and installs them into the resolved targets.

use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::{Session, install};

/// Run install command
pub fn run(path: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let mut session = Session::open(path)?;
    install::run(&mut session, &args.packs, args.force)
}
