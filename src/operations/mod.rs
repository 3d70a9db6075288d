//! Operations module for managing Minecraft packs
//!
//! This module provides the workflows behind each command:
//! - update: Refresh the local catalog
//! - install: Resolve, download and install packs
//! - upgrade: Reinstall packs the catalog has newer versions of
//! - remove: Remove installed packs
//! - list: List or search the catalog or the installed packs
//!
//! The operations coordinate with:
//! - Catalog store: the local catalog cache (from catalog module)
//! - Resolver: pack lookup and download requests (from resolver module)
//! - Install manager: targets and manifests (from installer module)
//! - UI: listing output (from ui module)

pub mod install;
pub mod list;
pub mod remove;
pub mod session;
pub mod update;
pub mod upgrade;

pub use list::ListOptions;
pub use session::Session;
