//! Command implementations for mcpkg CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod remove;
pub mod update;
pub mod upgrade;
pub mod version;
