mod browse;
mod listing;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use storefinder_locator::{resolve_selection, LocationIndex, LocatorSettings, SelectionState};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefinder")]
#[command(about = "Browse the store dataset by state and city")]
struct Cli {
    /// Dataset file (overrides `STOREFINDER_DATASET_PATH`)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// State/city filter shared by the listing commands.
///
/// An omitted `--state` keeps the configured default pair; `--state ""`
/// selects every state.
#[derive(Debug, Clone, Default, Args)]
struct SelectionArgs {
    /// State to select
    #[arg(long)]
    state: Option<String>,
    /// City to select within the state
    #[arg(long)]
    city: Option<String>,
}

impl SelectionArgs {
    fn resolve(&self, index: &LocationIndex, default: SelectionState) -> SelectionState {
        resolve_selection(default, index, self.state.as_deref(), self.city.as_deref())
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every state in the dataset
    States,
    /// List the cities of one state
    Cities {
        /// State name, as listed by `states`
        state: String,
    },
    /// List the stores visible under a selection
    Stores {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Print the raw store records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the viewport command the map would receive
    Frame {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Run a locator session against a logging map and print the result
    Browse {
        #[command(flatten)]
        selection: SelectionArgs,
        /// Store id to click after the selection settles
        #[arg(long)]
        focus: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("storefinder: run with --help to see the available commands");
        return Ok(());
    };

    let dataset_path = cli.dataset.unwrap_or_else(|| config.dataset_path.clone());
    let index = Arc::new(LocationIndex::new(storefinder_core::load_dataset(
        &dataset_path,
    )?));
    let settings = LocatorSettings::from_config(&config);
    let default = settings.default_selection.clone();

    match command {
        Commands::States => listing::print_states(&index),
        Commands::Cities { state } => listing::print_cities(&index, &state)?,
        Commands::Stores { selection, json } => {
            let selection = selection.resolve(&index, default);
            listing::print_stores(&index, &selection, json)?;
        }
        Commands::Frame { selection } => {
            let selection = selection.resolve(&index, default);
            listing::print_frame(&index, &selection, &settings.policy)?;
        }
        Commands::Browse { selection, focus } => {
            browse::run_browse(index, settings, &selection, focus.as_deref());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
