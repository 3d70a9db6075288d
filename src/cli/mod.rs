//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - remove: Remove command arguments
//! - upgrade: Upgrade command arguments
//! - list: List and search command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod upgrade;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::{ListArgs, ListFlags, SearchArgs};
pub use remove::RemoveArgs;
pub use upgrade::UpgradeArgs;

/// mcpkg - Minecraft pack manager
///
/// Install, upgrade and remove data packs, crafting tweaks and resource packs.
#[derive(Parser, Debug)]
#[command(
    name = "mcpkg",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package manager for Minecraft data packs, crafting tweaks and resource packs",
    long_about = "mcpkg keeps a local copy of the pack catalog and installs packs from it into \
                  worlds, servers and the resource pack folder, tracking what it installed \
                  so packs can be upgraded and removed later.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mcpkg update                       \x1b[90m# Refresh the local catalog\x1b[0m\n   \
                  mcpkg search sleep                 \x1b[90m# Find packs by name or description\x1b[0m\n   \
                  mcpkg install Data.Graves          \x1b[90m# Install into the world in this directory\x1b[0m\n   \
                  mcpkg -p ~/server upgrade          \x1b[90m# Upgrade packs installed on a server\x1b[0m\n   \
                  mcpkg list --installed             \x1b[90m# List installed packs\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// World, server or datapacks directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "MCPKG_PATH")]
    pub path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Refresh the local pack catalog
    Update,

    /// Install packs from the catalog
    Install(InstallArgs),

    /// Remove installed packs
    Remove(RemoveArgs),

    /// Upgrade installed packs to the catalog version
    Upgrade(UpgradeArgs),

    /// List packs in the catalog or installed packs
    List(ListArgs),

    /// Search packs by regular expression
    Search(SearchArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
