use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install by pack id:\n    mcpkg install Data.Graves\n\n\
                   Install by catalog name:\n    mcpkg install \"multiplayer sleep\"\n\n\
                   Install into a server:\n    mcpkg --path ~/server install Data.Graves\n\n\
                   Replace installed packs without asking:\n    mcpkg install Data.Graves --force")]
pub struct InstallArgs {
    /// Pack ids (e.g. Data.Graves) or catalog names
    #[arg(required = true, value_name = "PACKS")]
    pub packs: Vec<String>,

    /// Replace installed packs without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = super::super::Cli::try_parse_from(["mcpkg", "install", "Data.Graves", "afk display"])
            .unwrap_or_else(|e| {
                panic!("Failed to parse CLI arguments: {}", e);
            });
        match cli.command {
            super::super::Commands::Install(args) => {
                assert_eq!(args.packs, vec!["Data.Graves", "afk display"]);
                assert!(!args.force);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_force() {
        let cli = super::super::Cli::try_parse_from(["mcpkg", "install", "-f", "Data.Graves"]).unwrap();
        match cli.command {
            super::super::Commands::Install(args) => assert!(args.force),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_requires_packs() {
        assert!(super::super::Cli::try_parse_from(["mcpkg", "install"]).is_err());
    }

    #[test]
    fn test_install_args_shape() {
        let args = InstallArgs::try_parse_from(["install", "Data.Graves"]).unwrap();
        assert_eq!(args.packs.len(), 1);
    }
}
