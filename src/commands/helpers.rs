//! Command helper utilities

use std::str::FromStr;

use crate::cli::ListFlags;
use crate::error::Result;
use crate::operations::ListOptions;
use crate::pack::PackType;

/// Parse `--type` values
pub fn parse_types(values: &[String]) -> Result<Vec<PackType>> {
    values.iter().map(|value| PackType::from_str(value)).collect()
}

/// Convert list/search flags into operation options
pub fn list_options(flags: &ListFlags) -> Result<ListOptions> {
    Ok(ListOptions {
        installed: flags.installed,
        compact: flags.compact,
        types: parse_types(&flags.types)?,
    })
}
