mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "wolf-scheduler")]
#[command(about = "Build a personal course and event schedule")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the course catalog
    Catalog {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a schedule and optionally export it
    Build {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        #[command(flatten)]
        selection: commands::SelectionArgs,

        /// Schedule title
        #[arg(short, long)]
        title: Option<String>,

        /// Export the schedule to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show every column, including credits and event details
        #[arg(long)]
        full: bool,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report overlapping activities in a schedule
    Conflicts {
        /// Catalog file
        #[arg(short, long)]
        catalog: PathBuf,

        #[command(flatten)]
        selection: commands::SelectionArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("wolf_scheduler_cli={log_level},wolf_scheduler_core={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Catalog { catalog, json } => commands::catalog_command(&catalog, json),
        Commands::Build {
            catalog,
            selection,
            title,
            output,
            full,
            json,
        } => commands::build_command(commands::BuildParams {
            catalog,
            selection,
            title,
            output,
            full,
            json,
        }),
        Commands::Conflicts { catalog, selection } => {
            commands::conflicts_command(&catalog, &selection)
        }
    }
}
