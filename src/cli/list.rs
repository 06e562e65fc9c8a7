use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List installed scripts:\n    scriptdock list\n\n\
                  Include descriptions:\n    scriptdock list --detailed")]
pub struct ListArgs {
    /// Show each script's description
    #[arg(long)]
    pub detailed: bool,
}
