use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config;
use crate::rawg::CatalogQuery;
use crate::render;
use crate::state::CatalogViewState;

use super::Result;

#[derive(Debug, Parser)]
pub struct RunBrowse {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[arg(short, long, help = "Release date range, e.g. 2019-09-01,2019-09-30")]
    pub dates: Option<String>,
    #[arg(short, long, help = "Platform IDs (comma-separated)")]
    pub platforms: Option<String>,
}

impl RunBrowse {
    pub(super) async fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let state = super::catalog_state(&conf);

        self.browse(&state, &mut io::stdout()).await
    }

    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            release_dates: self.dates.clone(),
            platforms: self.platforms.clone(),
            search_text: None,
        }
    }

    pub async fn browse<W: Write>(&self, state: &CatalogViewState, out: &mut W) -> Result<()> {
        state.load(self.query()).await?;

        Ok(render::write_game_list(out, &state.results())?)
    }
}
