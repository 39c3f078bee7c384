use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    arch completions bash > ~/.bash_completion.d/arch\n\n\
                  Generate zsh completions:\n    arch completions zsh > ~/.zfunc/_arch\n\n\
                  Generate fish completions:\n    arch completions fish > ~/.config/fish/completions/arch.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
