//! mcpkg - Minecraft pack manager
//!
//! A command line tool that installs data packs, crafting tweaks and resource
//! packs from a remote catalog and keeps track of what it installed.

use clap::Parser;

mod archive;
mod catalog;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod installer;
mod operations;
mod pack;
mod remote;
mod resolver;
#[cfg(test)]
mod test_fixtures;
mod ui;
mod version;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    ui::logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Update => commands::update::run(cli.path),
        Commands::Install(args) => commands::install::run(cli.path, args),
        Commands::Remove(args) => commands::remove::run(cli.path, args),
        Commands::Upgrade(args) => commands::upgrade::run(cli.path, args),
        Commands::List(args) => commands::list::run(cli.path, args),
        Commands::Search(args) => commands::list::search(cli.path, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
