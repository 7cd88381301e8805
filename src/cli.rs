//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "scriptcut",
    version,
    about = "Browse, cut and replay terminal sessions recorded with script(1)",
    long_about = "Browse, cut and replay terminal sessions recorded with script(1).\n\n\
        A capture named BASE is the pair BASE.session + BASE.timing, as written by:\n\n    \
        script --timing=BASE.timing BASE.session"
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of the default one
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a capture: size, duration, control sequence kinds
    Info {
        /// Capture base name (extensions optional)
        base: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List commands with their offset, time and description
    Dump {
        base: PathBuf,

        /// First command to list
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Maximum number of rows
        #[arg(long)]
        count: Option<usize>,

        /// Only list commands that start a timing entry
        #[arg(long)]
        boundaries: bool,
    },

    /// Delete commands FROM..TO (or the single command at FROM) and save
    Cut {
        base: PathBuf,

        /// First command to delete
        from: usize,

        /// End of the range, exclusive
        to: Option<usize>,

        /// Report what would be removed without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Replay a capture to the terminal with its recorded pacing
    Play {
        base: PathBuf,

        /// Command to start from
        #[arg(long, default_value_t = 0)]
        from: usize,

        /// Speed multiplier (0.1 to 16)
        #[arg(long)]
        speed: Option<f64>,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}
