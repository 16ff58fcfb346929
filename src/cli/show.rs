
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use strsim::normalized_levenshtein;

use crate::config;
use crate::models::game::GameSummary;
use crate::render;
use crate::state::CatalogViewState;

use super::Result;

#[derive(Debug, Parser)]
pub struct RunShow {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[arg(required = true, num_args = 1.., help = "Name of the game")]
    pub name: Vec<String>,
}

/// The result whose name is closest to `name`; the first one wins ties
pub fn best_match<'a>(games: &'a [GameSummary], name: &str) -> Option<&'a GameSummary> {
    let wanted = name.trim().to_lowercase();
    let score = |g: &GameSummary| normalized_levenshtein(&g.display_name().to_lowercase(), &wanted);

    games
        .iter()
        .fold(None, |best: Option<(&GameSummary, f64)>, g| {
            let s = score(g);
            match best {
                Some((_, best_score)) if best_score >= s => best,
                _ => Some((g, s)),
            }
        })
        .map(|(g, _)| g)
}

impl RunShow {
    pub(super) async fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let state = super::catalog_state(&conf);

        self.show(&state, &mut io::stdout()).await
    }

    pub async fn show<W: Write>(&self, state: &CatalogViewState, out: &mut W) -> Result<()> {
        let name = self.name.join(" ");

        if name.trim().is_empty() {
            writeln!(out, "Nothing to search for.")?;
            return Ok(());
        }

        state.search(&name).await?;

        let results = state.results();
        let Some(game) = best_match(&results, &name) else {
            writeln!(out, "No games found.")?;
            return Ok(());
        };

        state.select_item(game.clone());
        if let Some(selected) = state.selected_item() {
            render::write_game_details(out, &selected)?;
        }
        state.clear_selection();

        Ok(())
    }
}
