pub mod query;


use async_trait::async_trait;
use thiserror::Error;
use tokio::task::{self, JoinError};
use tracing::{debug, warn};
use ureq;

use crate::models::game::GameSummary;
use crate::models::rawg::GameListResponse;

pub use query::CatalogQuery;

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Why a fetch came back empty. Only used for logging: callers of `fetch_games` just see an
/// empty list.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No RAWG API key configured")]
    MissingCredential,
    #[error("Could not reach RAWG: {0}")]
    Transport(ureq::Transport),
    #[error("RAWG responded with status {0}")]
    Status(u16),
    #[error("Failed to read response body from RAWG: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bad JSON response from RAWG: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Fetch worker failed: {0}")]
    Worker(#[from] JoinError),
}

impl From<ureq::Error> for CatalogError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, _) => CatalogError::Status(code),
            ureq::Error::Transport(t) => CatalogError::Transport(t),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[async_trait]
pub trait GameCatalogHandling: Send + Sync {
    /// List games matching the query. Any failure is logged and yields an empty list.
    async fn fetch_games(&self, query: &CatalogQuery) -> Vec<GameSummary>;
}

#[derive(Clone, Debug)]
pub struct RawgClient {
    api_key: Option<String>,
    base_url: String,
}

impl RawgClient {
    /// An empty key counts as no key at all
    pub fn new(api_key: Option<&str>, base_url: &str) -> RawgClient {
        RawgClient {
            api_key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
            base_url: base_url.to_string(),
        }
    }

    pub(crate) async fn try_fetch_games(&self, query: &CatalogQuery) -> Result<Vec<GameSummary>> {
        let api_key = self.api_key.as_deref().ok_or(CatalogError::MissingCredential)?;
        let url = query.url(&self.base_url, api_key);

        debug!(?query, "Fetching games from RAWG");

        // ureq blocks, so keep it off the async workers
        let page = task::spawn_blocking(move || get_games_page(&url)).await??;

        Ok(page.results)
    }
}

fn get_games_page(url: &str) -> Result<GameListResponse> {
    let res = ureq::get(url)
        .set("Content-Type", "application/json")
        .call()?;

    // ureq only errors on 4xx/5xx; anything but a plain 200 is still a failure here
    if res.status() != 200 {
        return Err(CatalogError::Status(res.status()));
    }

    let raw = res.into_string()?;
    Ok(serde_json::from_str::<GameListResponse>(&raw)?)
}

#[async_trait]
impl GameCatalogHandling for RawgClient {
    async fn fetch_games(&self, query: &CatalogQuery) -> Vec<GameSummary> {
        match self.try_fetch_games(query).await {
            Ok(games) => {
                debug!(count = games.len(), "Fetched games from RAWG");
                games
            }
            Err(e) => {
                warn!("Fetching games failed, showing no results: {}", e);
                vec![]
            }
        }
    }
}
