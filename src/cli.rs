pub mod browse;
pub mod search;
pub mod show;

use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use tokio::task::JoinError;

use crate::config::{Config, ConfigError};
use crate::rawg::RawgClient;
use crate::state::CatalogViewState;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog task failed: {0}")]
    Task(#[from] JoinError),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "gamehub")]
#[command(version = "0.1.0")]
enum Cli {
    /// List games from the RAWG catalog
    Browse(browse::RunBrowse),
    /// Search the catalog by name
    Search(search::RunSearch),
    /// Show details for the game best matching a name
    Show(show::RunShow),
}

impl Cli {
    async fn run(&self) -> Result<()> {
        match self {
            Self::Browse(cmd) => cmd.run().await,
            Self::Search(cmd) => cmd.run().await,
            Self::Show(cmd) => cmd.run().await,
        }
    }
}

/// View state backed by the real RAWG client described by the config
fn catalog_state(conf: &Config) -> CatalogViewState {
    let client = RawgClient::new(conf.api_key(), &conf.rawg.base_url);
    CatalogViewState::new(Arc::new(client))
}

pub async fn cli_main() {
    if let Err(e) = Cli::parse().run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
