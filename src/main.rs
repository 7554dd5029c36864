mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventlist")]
#[command(about = "Keep a dated list of personal events in a plain text file")]
struct Cli {
    /// Events file (defaults to events_file from config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/eventlist/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an event and save the list
    Add {
        /// Event date as DD.MM.YYYY
        date: String,

        /// Event description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// Save to this file instead of the events file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show events on or after a date
    Upcoming {
        /// First date to include as DD.MM.YYYY (defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Show at most this many events
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every stored event
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut manager = commands::open_manager(cli.file.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Add {
            date,
            description,
            output,
        } => commands::add::run(&mut manager, &date, &description, output),
        Commands::Upcoming { from, limit, json } => {
            commands::upcoming::run(&manager, from.as_deref(), limit, json)
        }
        Commands::List => commands::list::run(&manager),
    }
}
