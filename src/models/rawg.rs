
use serde::Deserialize;

use crate::models::game::GameSummary;

/// Envelope of RAWG's `/games` list endpoint. The pagination cursors are decoded but unused.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GameListResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<GameSummary>,
}
