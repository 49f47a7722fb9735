//! CLI command definitions using `clap` and top-level dispatch

pub mod setup;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use seglock_core::{load_config, Config};

use crate::commands;

fn arg_json() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output one JSON object per line")
}

pub fn after_help_text(examples: &[&str]) -> String {
    examples.iter().fold(String::from("EXAMPLES:\n"), |mut text, example| {
        text.push_str("  ");
        text.push_str(example);
        text.push('\n');
        text
    })
}

pub fn cmd_replay() -> ClapCommand {
    ClapCommand::new("replay")
        .about("Run a JSON-lines lock script against a fresh lock table")
        .long_about(
            "Each non-blank line of SCRIPT is one operation:

  {\"op\":\"acquire\",\"requests\":[...]}
  {\"op\":\"release\",\"transactionIds\":[1],\"sessionId\":\"s\",\"consoleId\":\"c\"}
  {\"op\":\"releaseSession\",\"sessionId\":\"s\",\"consoleId\":\"c\"}
  {\"op\":\"list\",\"sessionIds\":[\"s\"]}

Lines starting with '#' are comments. Rejections are reported, not errors.",
        )
        .arg(
            Arg::new("script")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to the script"),
        )
        .arg(arg_json())
        .after_help(after_help_text(&[
            "seglock replay locks.jsonl            Print one outcome per operation",
            "seglock replay locks.jsonl --json     Machine-readable outcomes",
        ]))
}

pub fn cmd_validate() -> ClapCommand {
    ClapCommand::new("validate")
        .about("Check a JSON array of lock records against the configured limits")
        .arg(
            Arg::new("file")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Path to a JSON array of lock records"),
        )
        .arg(arg_json())
        .after_help(after_help_text(&[
            "seglock validate batch.json           Exit 1 if any record is invalid",
        ]))
}

pub fn cmd_config() -> ClapCommand {
    ClapCommand::new("config").about("Print the effective configuration as TOML")
}

pub fn build_cli() -> ClapCommand {
    ClapCommand::new("seglock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Segment lock arbiter for shared hardware resources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Config file layered over the global config"),
        )
        .subcommand(cmd_replay())
        .subcommand(cmd_validate())
        .subcommand(cmd_config())
}

fn effective_config(matches: &ArgMatches) -> Result<Config> {
    let explicit = matches.get_one::<PathBuf>("config");
    load_config(explicit.map(PathBuf::as_path)).context("Failed to load configuration")
}

/// Parse arguments, load configuration, initialize logging and run the
/// selected command.
pub async fn run() -> Result<ExitCode> {
    let matches = build_cli().get_matches();
    let config = effective_config(&matches)?;
    setup::init_tracing(&config.logging.level)?;

    match matches.subcommand() {
        Some(("replay", sub_m)) => commands::replay::run(&config, sub_m).await,
        Some(("validate", sub_m)) => commands::validate::run(&config, sub_m).await,
        Some(("config", _)) => commands::config::run(&config),
        Some((other, _)) => Err(anyhow::anyhow!("Unknown command: {other}")),
        None => Err(anyhow::anyhow!("No command given")),
    }
}
