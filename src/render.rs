
use std::io::{Result, Write};

use itertools::Itertools;

use crate::models::game::{GameSummary, MetacriticBand};

pub fn write_game_list<W: Write>(out: &mut W, games: &[GameSummary]) -> Result<()> {
    if games.is_empty() {
        writeln!(out, "No games found.")?;
        return Ok(());
    }

    for game in games {
        write!(out, "⭐ {:.1}  {}  ({})", game.rating, game.display_name(), game.formatted_release_date())?;

        let families = game.platform_families();
        if !families.is_empty() {
            write!(out, "  [{}]", families.iter().join(", "))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

pub fn write_game_details<W: Write>(out: &mut W, game: &GameSummary) -> Result<()> {
    writeln!(out, "{}", game.display_name())?;
    writeln!(out, "⭐ {:.1} / {}", game.rating, game.rating_top.unwrap_or(5))?;

    if let Some(released) = game.long_release_date() {
        writeln!(out, "Released: {}", released)?;
    } else if game.tba == Some(true) {
        writeln!(out, "Released: TBA")?;
    }

    if let (Some(score), Some(band)) = (game.metacritic, game.metacritic_band()) {
        let label = match band {
            MetacriticBand::Favorable => "favorable",
            MetacriticBand::Mixed => "mixed",
            MetacriticBand::Unfavorable => "unfavorable",
        };
        writeln!(out, "Metacritic: {} ({})", score, label)?;
    }

    if let Some(esrb) = game.esrb_rating.as_ref().and_then(|e| e.name.as_deref()) {
        writeln!(out, "Rating: {}", esrb)?;
    }

    let genres = game.genre_names();
    if !genres.is_empty() {
        writeln!(out, "Genres: {}", genres.join(", "))?;
    }

    let platforms: Vec<String> = game
        .platforms
        .iter()
        .flatten()
        .filter_map(|binding| {
            let name = binding.platform.as_ref()?.name.as_deref()?;
            Some(match binding.released_at.as_deref() {
                Some(at) if !at.is_empty() => format!("{} ({})", name, at),
                _ => name.to_string(),
            })
        })
        .collect();
    if !platforms.is_empty() {
        writeln!(out, "Platforms: {}", platforms.join(", "))?;
    }

    if let Some(ratings) = game.ratings.as_ref().filter(|r| !r.is_empty()) {
        writeln!(out, "Ratings:")?;
        for r in ratings {
            writeln!(
                out,
                "  {:<12} {:>6} ({:.0}%)",
                r.title.as_deref().unwrap_or(""),
                r.count.unwrap_or(0),
                r.percent.unwrap_or(0.0)
            )?;
        }
    }

    if let Some(status) = &game.added_by_status {
        let counts: Vec<(&str, u64)> = [
            ("Playing", status.playing),
            ("Completed", status.beaten),
            ("Owned", status.owned),
            ("Want to Play", status.toplay),
            ("Dropped", status.dropped),
            ("Not Yet", status.yet),
        ]
        .into_iter()
        .filter_map(|(title, count)| Some((title, count.filter(|c| *c > 0)?)))
        .collect();

        if !counts.is_empty() {
            writeln!(out, "Player status:")?;
            for (title, count) in counts {
                writeln!(out, "  {:<12} {:>6}", title, count)?;
            }
        }
    }

    writeln!(
        out,
        "Hours played: {}  Ratings: {}  Added: {}",
        game.playtime.unwrap_or(0),
        game.ratings_count.unwrap_or(0),
        game.added.unwrap_or(0)
    )?;

    // Timestamps that don't parse are shown as RAWG sent them
    if let Some(updated) = game.updated_at() {
        writeln!(out, "Updated: {}", updated.format("%d/%m/%Y"))?;
    } else if let Some(raw) = game.updated.as_deref().filter(|u| !u.is_empty()) {
        writeln!(out, "Updated: {}", raw)?;
    }

    Ok(())
}
