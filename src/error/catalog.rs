//! Catalog and remote service errors

use super::McpkgError;

/// Creates a catalog fetch error for the given document URL
pub fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> McpkgError {
    McpkgError::CatalogFetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates a catalog parse error; `origin` names the document or cache file
pub fn parse_failed(origin: impl Into<String>, reason: impl ToString) -> McpkgError {
    McpkgError::CatalogParseFailed {
        origin: origin.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for an `{"status": "error"}` payload from the download-link service
pub fn remote_request_failed(message: impl Into<String>) -> McpkgError {
    McpkgError::RemoteRequestFailed {
        message: message.into(),
    }
}

/// Creates a transport-level HTTP error
pub fn http_failed(url: impl Into<String>, reason: impl ToString) -> McpkgError {
    McpkgError::HttpRequestFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}
