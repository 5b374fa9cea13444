mod commands;
mod config;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tba")]
#[command(about = "Sort and label competition events exported from The Blue Alliance")]
struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events in season order, grouped by week
    Events {
        /// JSON file holding an array of events
        file: PathBuf,

        /// Only show events from this season
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Show the derived labels for one event
    Event {
        /// JSON file holding an array of events
        file: PathBuf,

        /// Event key (e.g. "2019miket")
        key: String,
    },
    /// Show where the config file lives, creating it if needed
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Events { file, year } => {
            let cfg = config::load_config()?;
            commands::events::run(&file, year.or(cfg.default_year), &cfg)
        }
        Commands::Event { file, key } => commands::event::run(&file, &key),
        Commands::Config => commands::config::run(),
    }
}
