use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, Command};

use wmstatus::commands;

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help("Config file (defaults to <config dir>/wmstatus/config.json)")
        .value_parser(value_parser!(std::path::PathBuf))
}

fn build_cli() -> Command {
    Command::new("wmstatus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Status bar updater for dwm-style window managers")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("run")
                .about("Publish the status line every tick until interrupted")
                .arg(config_arg())
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .help("Print each status line instead of setting the X root window name")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("once")
                        .long("once")
                        .help("Publish a single status line and exit")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("Log more (-v info, -vv debug)")
                        .action(ArgAction::Count),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Inspect or create the configuration file (use 'wmstatus config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .arg(config_arg())
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(Command::new("show").about("Print the effective configuration as JSON"))
                .subcommand(
                    Command::new("init")
                        .about("Write the default configuration to disk")
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .help("Overwrite an existing file")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for (bash, zsh, fish, powershell, elvish)")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let verbosity = matches
        .subcommand_matches("run")
        .map(|m| m.get_count("verbose"))
        .unwrap_or(0);
    wmstatus::init_logging(verbosity);

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => commands::run(sub_matches),
        Some(("config", sub_matches)) => commands::config(sub_matches),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Use 'wmstatus --help' for more information.");
            Ok(())
        }
    }
}
