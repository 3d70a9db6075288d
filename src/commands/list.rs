//! List and search command implementations

use std::path::PathBuf;

use crate::cli::{ListArgs, SearchArgs};
use crate::commands::helpers::list_options;
use crate::error::Result;
use crate::operations::{Session, list};

/// Run list command
pub fn run(path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let options = list_options(&args.flags)?;
    let mut session = Session::open(path)?;
    list::list(&mut session, &options)
}

/// Run search command
pub fn search(path: Option<PathBuf>, args: SearchArgs) -> Result<()> {
    let options = list_options(&args.list)?;
    let mut session = Session::open(path)?;
    list::search(&mut session, &args.patterns, &options)
}
