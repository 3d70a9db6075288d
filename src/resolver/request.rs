//! Requests to the download-link service
//!
//! The service takes a form with a JSON `packs` mapping
//! (`{"<category>": ["<remote name>", ...]}`) and the base game `version`,
//! and answers with a relative link to a zip:
//!
//! ```json
//! {"status": "success", "link": "/download/VanillaTweaks_d123.zip"}
//! {"status": "error", "message": "No packs selected"}
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::config::Settings;
use crate::error::Result;
use crate::error::catalog::remote_request_failed;
use crate::pack::{PackSet, PackType};
use crate::remote::Transport;

/// One call to the download-link service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub pack_type: PackType,
    /// Lowercased category to remote names
    pub packs: BTreeMap<String, Vec<String>>,
}

impl DownloadRequest {
    fn for_packs(pack_type: PackType, packs: &PackSet) -> Self {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for pack in packs.iter() {
            grouped
                .entry(pack.category.to_lowercase())
                .or_default()
                .push(pack.remote_name.clone());
        }
        Self {
            pack_type,
            packs: grouped,
        }
    }

    /// The `packs` form field
    pub fn payload(&self) -> Result<String> {
        serde_json::to_string(&self.packs).map_err(|e| remote_request_failed(e.to_string()))
    }
}

/// A request together with the packs it covers
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedDownload {
    pub request: DownloadRequest,
    pub packs: PackSet,
}

pub type DownloadPlan = BTreeMap<PackType, Vec<PlannedDownload>>;

/// Batch `packs` into download requests
///
/// Data packs and resource packs each go out as a single request covering
/// every pack of that type. Crafting tweaks get one request per tweak, since
/// the service would otherwise merge them into one combined tweak.
pub fn build_download_request(packs: &PackSet) -> DownloadPlan {
    let mut plan = DownloadPlan::new();
    for pack_type in PackType::ALL {
        let of_type = packs.filter_by_type(&[pack_type]);
        if of_type.is_empty() {
            continue;
        }

        let downloads = match pack_type {
            PackType::Crafting => of_type
                .into_iter()
                .map(|pack| {
                    let single: PackSet = std::iter::once(pack).collect();
                    PlannedDownload {
                        request: DownloadRequest::for_packs(pack_type, &single),
                        packs: single,
                    }
                })
                .collect(),
            PackType::Data | PackType::Resource => vec![PlannedDownload {
                request: DownloadRequest::for_packs(pack_type, &of_type),
                packs: of_type,
            }],
        };
        plan.insert(pack_type, downloads);
    }
    plan
}

#[derive(Debug, Deserialize)]
struct LinkResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Interpret a download-link response, returning an absolute URL
pub fn parse_link_response(body: &str, settings: &Settings) -> Result<String> {
    let response: LinkResponse = serde_json::from_str(body)
        .map_err(|e| remote_request_failed(format!("Unexpected response from service: {e}")))?;

    if response.status.as_deref() == Some("error") {
        return Err(remote_request_failed(
            response
                .message
                .unwrap_or_else(|| "No error message".to_string()),
        ));
    }

    response
        .link
        .map(|link| settings.endpoint(&link))
        .ok_or_else(|| remote_request_failed("Response did not contain a download link"))
}

/// Ask the service for a download link for `request`
pub fn request_download_link(
    transport: &dyn Transport,
    settings: &Settings,
    request: &DownloadRequest,
) -> Result<String> {
    let url = settings.download_service_url(request.pack_type);
    let payload = request.payload()?;
    debug!("Requesting {} link with packs={payload}", request.pack_type.kind());

    let body = transport.post_form(
        &url,
        &[("packs", payload.as_str()), ("version", settings.game_version.as_str())],
    )?;
    parse_link_response(&body, settings)
}
