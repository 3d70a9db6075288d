//! Network transport used by the catalog store and the installer
//!
//! All network access goes through the [`Transport`] trait so the core can be
//! exercised without a network. [`HttpTransport`] is the production
//! implementation.

mod http;

pub use http::HttpTransport;

use crate::error::Result;

/// Bytes fetched from a URL together with the length the server declared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub bytes: Vec<u8>,
    pub declared_len: Option<u64>,
}

impl Payload {
    #[allow(dead_code)] // Used in tests
    pub fn new(bytes: Vec<u8>) -> Self {
        let declared_len = Some(bytes.len() as u64);
        Self {
            bytes,
            declared_len,
        }
    }

    /// Sanity check between the declared and received length
    ///
    /// A missing or zero declared length cannot be checked and counts as a match.
    pub fn length_matches(&self) -> bool {
        match self.declared_len {
            None | Some(0) => true,
            Some(len) => len == self.bytes.len() as u64,
        }
    }
}

/// Blocking, sequential network access
pub trait Transport {
    /// GET `url`; `label` describes the download for progress output.
    /// Non-success statuses are errors.
    fn get(&self, url: &str, label: &str) -> Result<Payload>;

    /// POST a url-encoded form and return the response body
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String>;
}
