
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::game::GameSummary;
use crate::rawg::{CatalogQuery, GameCatalogHandling};

/// Everything a catalog screen renders, published as one value so observers never see a
/// half-applied fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    /// Results of the most recently completed fetch, replaced wholesale
    pub results: Vec<GameSummary>,
    /// True while a search intent's fetch is outstanding. Plain loads never set it.
    pub is_searching: bool,
    /// Game opened for details; fetches leave it alone
    pub selected: Option<GameSummary>,
}

/// State holder for one catalog screen.
///
/// Intents that fetch spawn a Tokio task and return its handle straight away. Dropping the
/// handle does not cancel the fetch, and nothing cancels a superseded one: when fetches
/// overlap, whichever completes last overwrites `results` (and clears `is_searching`),
/// regardless of the order the intents were issued in.
///
/// Observers call `subscribe` and are woken on every change.
pub struct CatalogViewState {
    catalog: Arc<dyn GameCatalogHandling>,
    state: Arc<watch::Sender<CatalogSnapshot>>,
}

impl CatalogViewState {
    pub fn new(catalog: Arc<dyn GameCatalogHandling>) -> CatalogViewState {
        let (state, _) = watch::channel(CatalogSnapshot::default());

        CatalogViewState { catalog, state: Arc::new(state) }
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    pub fn results(&self) -> Vec<GameSummary> {
        self.state.borrow().results.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.state.borrow().is_searching
    }

    pub fn selected_item(&self) -> Option<GameSummary> {
        self.state.borrow().selected.clone()
    }

    /// Load the unfiltered catalog front page
    pub fn load_default(&self) -> JoinHandle<()> {
        self.load(CatalogQuery::default())
    }

    /// Load with filters. Leaves `is_searching` untouched, so an in-flight load is
    /// indistinguishable from idle through that flag.
    pub fn load(&self, query: CatalogQuery) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);

        tokio::spawn(async move {
            let games = catalog.fetch_games(&query).await;
            debug!(count = games.len(), "Applying catalog load");

            state.send_modify(|s| s.results = games);
        })
    }

    /// Search by free text. `is_searching` is set before this returns and cleared together
    /// with the results when this search's fetch completes.
    pub fn search(&self, text: &str) -> JoinHandle<()> {
        let catalog = Arc::clone(&self.catalog);
        let state = Arc::clone(&self.state);
        let query = CatalogQuery::search(text);

        self.state.send_modify(|s| s.is_searching = true);

        tokio::spawn(async move {
            let games = catalog.fetch_games(&query).await;
            debug!(count = games.len(), "Applying search results");

            state.send_modify(|s| {
                s.results = games;
                s.is_searching = false;
            });
        })
    }

    /// Go back to the default list after a search. Ignored while a search is outstanding.
    pub fn clear_search(&self) -> Option<JoinHandle<()>> {
        if self.is_searching() {
            debug!("Ignoring clear while a search is in flight");
            return None;
        }

        Some(self.load_default())
    }

    pub fn select_item(&self, game: GameSummary) {
        self.state.send_modify(|s| s.selected = Some(game));
    }

    pub fn clear_selection(&self) {
        self.state.send_modify(|s| s.selected = None);
    }
}
