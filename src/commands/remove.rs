//! Remove command implementation

use std::path::PathBuf;

use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::operations::{Session, remove};

/// Run remove command
pub fn run(path: Option<PathBuf>, args: RemoveArgs) -> Result<()> {
    let mut session = Session::open(path)?;
    remove::run(&mut session, &args.packs)
}
