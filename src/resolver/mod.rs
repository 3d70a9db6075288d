//! Pack lookup for Minecraft packs
//!
//! This module handles:
//! - Finding a pack by formal id or by the name the catalog publishes it under
//! - Searching the catalog with case-insensitive patterns
//! - Building the batched requests sent to the download-link service

pub mod request;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::pack::{Pack, PackSet};

pub use request::{PlannedDownload, build_download_request, request_download_link};

/// Lookups over one pack set (the catalog or an installed manifest)
pub struct Resolver<'a> {
    packs: &'a PackSet,
}

impl<'a> Resolver<'a> {
    pub fn new(packs: &'a PackSet) -> Self {
        Self { packs }
    }

    /// Find a pack by exact id, then by exact (case-sensitive) remote name
    ///
    /// No match is not an error here; callers decide whether to skip, warn or
    /// synthesize an unmanaged pack.
    pub fn find(&self, term: &str) -> Option<&'a Pack> {
        if let Some(pack) = self.packs.get(term) {
            return Some(pack);
        }
        self.packs.iter().find(|pack| pack.remote_name == term)
    }

    /// Union of the packs matching any pattern
    ///
    /// Each pattern is a case-insensitive regex tried against id, remote name
    /// and description. A pattern that is not a valid regex is matched as a
    /// literal substring. An empty pattern list matches nothing.
    pub fn search<S: AsRef<str>>(&self, patterns: &[S]) -> PackSet {
        let mut hits = PackSet::new();
        for pattern in patterns {
            let Some(regex) = compile(pattern.as_ref()) else {
                warn!("Skipping unusable search pattern '{}'", pattern.as_ref());
                continue;
            };
            let matched: PackSet = self
                .packs
                .iter()
                .filter(|pack| matches(&regex, pack))
                .cloned()
                .collect();
            debug!("Pattern '{}' matched {} packs", pattern.as_ref(), matched.len());
            hits.union(matched);
        }
        hits
    }
}

fn compile(pattern: &str) -> Option<Regex> {
    let build = |p: &str| RegexBuilder::new(p).case_insensitive(true).build();
    build(pattern)
        .or_else(|_| {
            debug!("'{pattern}' is not a valid regex, matching it literally");
            build(&regex::escape(pattern))
        })
        .ok()
}

fn matches(regex: &Regex, pack: &Pack) -> bool {
    regex.is_match(&pack.id())
        || regex.is_match(&pack.remote_name)
        || pack
            .description
            .as_deref()
            .is_some_and(|description| regex.is_match(description))
}
