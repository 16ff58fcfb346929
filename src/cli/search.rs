use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config;
use crate::render;
use crate::state::CatalogViewState;

use super::Result;

#[derive(Debug, Parser)]
pub struct RunSearch {
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,
    #[arg(required = true, num_args = 1.., help = "Text to search for")]
    pub text: Vec<String>,
}

impl RunSearch {
    pub(super) async fn run(&self) -> Result<()> {
        let conf = config::read(self.config_file.as_ref())?;
        let state = super::catalog_state(&conf);

        self.search(&state, &mut io::stdout()).await
    }

    pub async fn search<W: Write>(&self, state: &CatalogViewState, out: &mut W) -> Result<()> {
        let text = self.text.join(" ");

        // Blank submissions are dropped rather than sent as an empty search
        if text.trim().is_empty() {
            writeln!(out, "Nothing to search for.")?;
            return Ok(());
        }

        state.search(&text).await?;

        Ok(render::write_game_list(out, &state.results())?)
    }
}
