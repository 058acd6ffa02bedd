//! claude-commands - slash-command installer
//!
//! Installs command definitions from a catalog into `<config-dir>/commands`,
//! keeps `installed_commands.json` up to date and can back up, verify,
//! restore and remove installed commands.

use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod installer;
mod transaction;
mod ui;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("claude_commands", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .parse_default_env()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let global = &cli.global;
    let result = match cli.command {
        Commands::Install(args) => commands::install::run(global, args),
        Commands::Uninstall(args) => commands::uninstall::run(global, args),
        Commands::List(args) => commands::list::run(global, args),
        Commands::Validate(args) => commands::validate::run(global, args),
        Commands::Verify(args) => commands::verify::run(global, args),
        Commands::Restore(args) => commands::restore::run(global, args),
        Commands::Status => commands::status::run(global),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
