//! Error types and handling for mcpkg
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Convenience constructors are grouped by error domain:
//! - [`catalog`]: catalog fetch/parse and download-link service errors
//! - [`install`]: target resolution and manifest errors
//! - [`fs`]: file system errors

pub mod catalog;
pub mod fs;
pub mod install;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcpkg operations
#[derive(Error, Diagnostic, Debug)]
pub enum McpkgError {
    // Catalog errors
    #[error("Failed to fetch catalog from {url}: {reason}")]
    #[diagnostic(
        code(mcpkg::catalog::fetch_failed),
        help("Check your network connection and run 'mcpkg update' again")
    )]
    CatalogFetchFailed { url: String, reason: String },

    #[error("Failed to parse catalog data from {origin}: {reason}")]
    #[diagnostic(
        code(mcpkg::catalog::parse_failed),
        help("Run 'mcpkg update' to rebuild the local catalog")
    )]
    CatalogParseFailed { origin: String, reason: String },

    #[error("Remote service returned an error: {message}")]
    #[diagnostic(
        code(mcpkg::remote::request_failed),
        help("Run with --verbose to see the request that was sent")
    )]
    RemoteRequestFailed { message: String },

    #[error("HTTP request to {url} failed: {reason}")]
    #[diagnostic(code(mcpkg::remote::http_failed))]
    HttpRequestFailed { url: String, reason: String },

    // Pack errors
    #[error("Pack '{term}' was not found in the catalog")]
    #[diagnostic(
        code(mcpkg::pack::not_found),
        help("Use 'mcpkg search <pattern>' to find the pack id")
    )]
    PackNotFound { term: String },

    #[error("Pack type '{pack_type}' is not supported")]
    #[diagnostic(
        code(mcpkg::pack::type_unsupported),
        help("Supported pack types: data, crafting, resource")
    )]
    PackTypeUnsupported { pack_type: String },

    #[error("Invalid version string: '{value}'")]
    #[diagnostic(code(mcpkg::version::parse_failed))]
    VersionParseFailed { value: String },

    // Install errors
    #[error("A datapacks directory could not be found in '{path}'")]
    #[diagnostic(
        code(mcpkg::install::invalid_target),
        help("Run inside a world, a server, or a world's datapacks folder, or pass --path")
    )]
    InvalidTarget { path: String },

    #[error("Pack '{id}' is not installed")]
    #[diagnostic(
        code(mcpkg::install::not_installed),
        help("Use 'mcpkg list --installed' to see installed packs")
    )]
    PackNotInstalled { id: String },

    #[error("Pack '{id}' is installed, but its installed location is unknown")]
    #[diagnostic(code(mcpkg::install::missing_artifact))]
    MissingArtifact { id: String },

    #[error("Failed to parse manifest {path}: {reason}")]
    #[diagnostic(code(mcpkg::install::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid pack archive: {reason}")]
    #[diagnostic(code(mcpkg::install::archive_invalid))]
    ArchiveInvalid { reason: String },

    #[error("Failed to read confirmation: {reason}")]
    #[diagnostic(code(mcpkg::install::prompt_failed))]
    PromptFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file {path}: {reason}")]
    #[diagnostic(code(mcpkg::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(mcpkg::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(mcpkg::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mcpkg::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for McpkgError {
    fn from(err: std::io::Error) -> Self {
        McpkgError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for McpkgError {
    fn from(err: zip::result::ZipError) -> Self {
        McpkgError::ArchiveInvalid {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for McpkgError {
    fn from(err: inquire::InquireError) -> Self {
        McpkgError::PromptFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, McpkgError>;
