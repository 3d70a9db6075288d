//! Update command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::operations::{Session, update};

/// Run update command
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let mut session = Session::open(path)?;
    update::run(&mut session)
}
