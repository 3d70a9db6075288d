//! Install target and manifest errors

use std::path::Path;

use super::McpkgError;

/// Creates an invalid install target error
pub fn invalid_target(path: &Path) -> McpkgError {
    McpkgError::InvalidTarget {
        path: path.display().to_string(),
    }
}

/// Creates a pack-not-installed error
pub fn not_installed(id: impl Into<String>) -> McpkgError {
    McpkgError::PackNotInstalled { id: id.into() }
}

/// Creates a missing-artifact error
pub fn missing_artifact(id: impl Into<String>) -> McpkgError {
    McpkgError::MissingArtifact { id: id.into() }
}

/// Creates a manifest parse error
pub fn manifest_parse_failed(path: &Path, reason: impl ToString) -> McpkgError {
    McpkgError::ManifestParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
