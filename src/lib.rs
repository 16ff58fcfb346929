//! Browse the RAWG games catalog.
//!
//! [`rawg::RawgClient`] talks to the catalog API and [`state::CatalogViewState`] turns user
//! intents (load, search, select) into an observable [`state::CatalogSnapshot`].

pub mod cli;
pub mod config;
pub mod models;
pub mod rawg;
pub mod render;
pub mod state;
