mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ConfigCommands};
use scriptcut::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Info { base, json } => commands::info::handle(&base, json, &config),
        Commands::Dump {
            base,
            from,
            count,
            boundaries,
        } => commands::dump::handle(&base, from, count, boundaries, &config),
        Commands::Cut {
            base,
            from,
            to,
            dry_run,
        } => commands::cut::handle(&base, from, to, dry_run, &config),
        Commands::Play { base, from, speed } => commands::play::handle(&base, from, speed, &config),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "scriptcut", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log to stderr: warn by default, `-v` info, `-vv` debug. RUST_LOG wins.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
