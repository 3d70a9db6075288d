use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Remove a pack:\n    mcpkg remove Data.Graves\n\n\
                   Remove from a specific world:\n    mcpkg --path \"saves/New World\" remove Data.Graves")]
pub struct RemoveArgs {
    /// Installed pack ids or catalog names
    #[arg(required = true, value_name = "PACKS")]
    pub packs: Vec<String>,
}
