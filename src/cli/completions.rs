use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mcpkg completions --shell bash > ~/.bash_completion.d/mcpkg\n\n\
                  Generate zsh completions:\n    mcpkg completions --shell zsh > ~/.zfunc/_mcpkg\n\n\
                  Generate fish completions:\n    mcpkg completions --shell fish > ~/.config/fish/completions/mcpkg.fish\n\n\
                  Generate PowerShell completions:\n    mcpkg completions --shell powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: clap_complete::Shell,
}
