//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_world, FakeTransport};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let world = create_world(&temp.path().join("My World"));
//!     let transport = FakeTransport::new().with_get("https://host/dp.json", b"{}");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::error::catalog::http_failed;
use crate::error::Result;
use crate::installer::Confirm;
use crate::installer::target::WORLD_ENTRIES;
use crate::remote::{Payload, Transport};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a directory that passes the "is a world" check.
///
/// # Panics
///
/// Panics if any entry cannot be created.
pub fn create_world(path: &Path) -> PathBuf {
    std::fs::create_dir_all(path).expect("Failed to create world directory");
    for entry in WORLD_ENTRIES {
        let entry_path = path.join(entry);
        if entry.contains('.') {
            std::fs::write(&entry_path, b"").expect("Failed to create world file");
        } else {
            std::fs::create_dir_all(&entry_path).expect("Failed to create world folder");
        }
    }
    path.to_path_buf()
}

/// Create a server directory (`eula.txt` plus a `world/` save).
///
/// # Panics
///
/// Panics if any entry cannot be created.
pub fn create_server(path: &Path) -> PathBuf {
    create_world(&path.join("world"));
    std::fs::write(path.join("eula.txt"), b"eula=true").expect("Failed to write eula.txt");
    path.to_path_buf()
}

/// Build an in-memory zip from `(path, content)` entries.
///
/// # Panics
///
/// Panics if the archive cannot be written.
#[must_use]
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (path, content) in entries {
        writer
            .start_file(*path, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        writer.write_all(content).expect("Failed to write zip entry");
    }
    writer.finish().expect("Failed to finish zip").into_inner()
}

/// A remote catalog document with one category
#[must_use]
pub fn catalog_document(category: &str, packs: &[(&str, &str, &str)]) -> String {
    let packs: Vec<serde_json::Value> = packs
        .iter()
        .map(|(name, display, version)| {
            serde_json::json!({
                "name": name,
                "display": display,
                "version": version,
                "description": format!("{display} description"),
            })
        })
        .collect();
    serde_json::json!({
        "categories": [{ "category": category, "packs": packs }]
    })
    .to_string()
}

/// In-memory [`Transport`] that serves canned responses and records requests
#[derive(Default)]
pub struct FakeTransport {
    gets: HashMap<String, Vec<u8>>,
    posts: HashMap<String, String>,
    requests: RefCell<Vec<String>>,
    forms: RefCell<Vec<Vec<(String, String)>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_get(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.gets.insert(url.to_string(), body.into());
        self
    }

    #[must_use]
    pub fn with_post(mut self, url: &str, body: &str) -> Self {
        self.posts.insert(url.to_string(), body.to_string());
        self
    }

    /// Requests made so far, as `"GET <url>"` / `"POST <url>"`
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// Form fields of every POST made so far
    pub fn forms(&self) -> Vec<Vec<(String, String)>> {
        self.forms.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str, _label: &str) -> Result<Payload> {
        self.requests.borrow_mut().push(format!("GET {url}"));
        self.gets
            .get(url)
            .map(|body| Payload::new(body.clone()))
            .ok_or_else(|| http_failed(url, "HTTP 404 Not Found"))
    }

    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        self.requests.borrow_mut().push(format!("POST {url}"));
        self.forms.borrow_mut().push(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        );
        self.posts
            .get(url)
            .cloned()
            .ok_or_else(|| http_failed(url, "HTTP 404 Not Found"))
    }
}

/// [`Confirm`] with a fixed answer that counts how often it was asked
pub struct ScriptedConfirm {
    answer: bool,
    asked: Rc<Cell<usize>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter of questions asked
    pub fn counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.asked)
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, _question: &str) -> Result<bool> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::target::is_world;

    #[test]
    fn test_create_world() {
        let temp = create_temp_dir();
        let world = create_world(&temp.path().join("w"));
        assert!(is_world(&world));
    }

    #[test]
    fn test_fake_transport_records_requests() {
        let transport = FakeTransport::new().with_get("http://x/a", b"abc".to_vec());
        assert_eq!(transport.get("http://x/a", "a").unwrap().bytes, b"abc");
        assert!(transport.get("http://x/b", "b").is_err());
        assert_eq!(transport.requests(), vec!["GET http://x/a", "GET http://x/b"]);
    }

    #[test]
    fn test_scripted_confirm_counts() {
        let confirm = ScriptedConfirm::new(false);
        let counter = confirm.counter();
        assert!(!confirm.confirm("Replace?").unwrap());
        assert_eq!(counter.get(), 1);
    }
}
