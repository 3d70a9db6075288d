//! Version comparison for upgrade detection
//!
//! Versions are `major.minor.patch` with numeric components. Shorter forms
//! such as `1.2` are padded with zeros; anything else is rejected.

use semver::Version;

use crate::error::{McpkgError, Result};

/// Parse a pack version string
///
/// Built by hand because `Version::parse` rejects the short `1.2` form.
pub fn parse(value: &str) -> Result<Version> {
    let parse_error = || McpkgError::VersionParseFailed {
        value: value.to_string(),
    };

    let parts: Vec<&str> = value.trim().split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(parse_error());
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(parse_error());
        }
        *slot = part.parse().map_err(|_| parse_error())?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

/// True only when `available` is strictly greater than `installed`
pub fn is_newer(available: &str, installed: &str) -> Result<bool> {
    Ok(parse(available)? > parse(installed)?)
}
