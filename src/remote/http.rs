//! HTTP transport backed by `reqwest::blocking`

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::{Payload, Transport};
use crate::common::fs::capacity_hint;
use crate::error::catalog::http_failed;
use crate::error::Result;
use crate::ui::progress::DownloadProgress;

/// Default HTTP request timeout (60 seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const CHUNK_SIZE: usize = 8 * 1024;

/// [`Transport`] over HTTP(S)
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mcpkg/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| http_failed("<client>", e))?;

        Ok(Self { client, timeout })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, label: &str) -> Result<Payload> {
        let mut response = self.client.get(url).send().map_err(|e| http_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_failed(url, format!("HTTP {status}")));
        }

        let declared_len = response.content_length();
        let progress = DownloadProgress::new(label, declared_len);
        let mut bytes = Vec::with_capacity(capacity_hint(declared_len));
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let read = match response.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) => {
                    progress.abandon();
                    return Err(http_failed(url, e));
                }
            };
            bytes.extend_from_slice(&chunk[..read]);
            progress.advance(read as u64);
        }
        progress.finish();

        debug!("'{url}' saved to memory, status code {status}");
        Ok(Payload {
            bytes,
            declared_len,
        })
    }

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        debug!("Sending request to '{url}': {fields:?}");
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .map_err(|e| http_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_failed(url, format!("HTTP {status}")));
        }

        response.text().map_err(|e| http_failed(url, e))
    }
}
