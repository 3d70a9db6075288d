use clap::{Args, Parser};

/// Options shared by list and search
#[derive(Args, Debug, Clone, Default)]
pub struct ListFlags {
    /// Show installed packs instead of the catalog
    #[arg(long, short = 'i')]
    pub installed: bool,

    /// One line per pack, without descriptions
    #[arg(long, short = 'c')]
    pub compact: bool,

    /// Only show packs of this type (data, crafting, resource)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub types: Vec<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the catalog:\n    mcpkg list\n\n\
                  List installed packs:\n    mcpkg list --installed\n\n\
                  List crafting tweaks only:\n    mcpkg list --type crafting --compact")]
pub struct ListArgs {
    #[command(flatten)]
    pub flags: ListFlags,
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search the catalog:\n    mcpkg search sleep\n\n\
                  Regular expressions are case-insensitive:\n    mcpkg search '^data\\.a'\n\n\
                  Search installed packs:\n    mcpkg search --installed graves")]
pub struct SearchArgs {
    /// Patterns matched against pack id, name and description
    #[arg(required = true, value_name = "PATTERN")]
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub list: ListFlags,
}
