use anyhow::{bail, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let Some(shell_str) = matches.get_one::<String>("shell") else {
        bail!("shell argument is required (usage: wmstatus completions <SHELL>)");
    };

    let shell = parse_shell(shell_str)?;
    generate(shell, cli, "wmstatus", &mut io::stdout());
    Ok(())
}

fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" => Ok(Shell::PowerShell),
        "elvish" => Ok(Shell::Elvish),
        _ => bail!(
            "Unsupported shell: {} (supported: bash, zsh, fish, powershell, elvish)",
            name
        ),
    }
}
