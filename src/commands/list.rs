//! List command implementation
//!
//! Lists installed scripts with the version and description read from their
//! headers.

use console::Style;

use crate::cli::ListArgs;
use crate::environment::{self, EnvironmentContext};
use crate::error::Result;
use crate::installer::ENTRYPOINT_NAME;
use crate::operations::update::installed_scripts;
use crate::version::{ArtifactHeader, parse_header};

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let env = environment::resolve();
    list_scripts(&env, args.detailed)
}

fn list_scripts(env: &EnvironmentContext, detailed: bool) -> Result<()> {
    let names = installed_scripts(env.scripts_root());
    if names.is_empty() {
        println!("No scripts installed in {}.", env.scripts_root().display());
        return Ok(());
    }

    println!(
        "Installed scripts ({}) in {} ({}):",
        names.len(),
        env.scripts_root().display(),
        env.mode()
    );
    println!();

    for name in &names {
        display_script(name, &read_header(env, name), detailed);
    }

    if env.scripts_root().join(ENTRYPOINT_NAME).is_file() {
        println!();
        display_script(ENTRYPOINT_NAME, &read_header(env, ENTRYPOINT_NAME), false);
    }

    Ok(())
}

/// Header of an installed script; unreadable or non-UTF-8 files get the defaults
fn read_header(env: &EnvironmentContext, name: &str) -> ArtifactHeader {
    let path = env.scripts_root().join(name);
    match std::fs::read_to_string(&path) {
        Ok(text) => parse_header(&text),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read script header");
            parse_header("")
        }
    }
}

fn display_script(name: &str, header: &ArtifactHeader, detailed: bool) {
    let version = header
        .version
        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(name),
        Style::new().dim().apply_to(version)
    );
    if detailed {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            header.description
        );
    }
}
