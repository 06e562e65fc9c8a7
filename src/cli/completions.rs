use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    scriptdock completions bash > ~/.bash_completion.d/scriptdock\n\n\
                  Generate zsh completions:\n    scriptdock completions zsh > ~/.zfunc/_scriptdock\n\n\
                  Generate fish completions:\n    scriptdock completions fish > ~/.config/fish/completions/scriptdock.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
