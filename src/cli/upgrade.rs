use clap::Parser;

/// Arguments for the upgrade command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Upgrade every outdated pack:\n    mcpkg upgrade\n\n\
                   Upgrade specific packs without asking:\n    mcpkg upgrade Data.Graves --force")]
pub struct UpgradeArgs {
    /// Installed packs to upgrade (all when omitted)
    #[arg(value_name = "PACKS")]
    pub packs: Vec<String>,

    /// Upgrade without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}
