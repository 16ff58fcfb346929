
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use itertools::Itertools;
use serde::Deserialize;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";
const UPDATED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single game as listed by the RAWG catalog.
///
/// RAWG marks nearly everything as nullable, so every field except `rating` is optional and
/// decodes to `None` when absent or `null`. A result without a `rating` fails to decode.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GameSummary {
    pub id: Option<u64>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub released: Option<String>,
    pub tba: Option<bool>,
    pub background_image: Option<String>,
    pub rating: f64,
    pub rating_top: Option<u32>,
    pub ratings: Option<Vec<RatingBreakdown>>,
    pub ratings_count: Option<u64>,
    pub reviews_text_count: Option<u64>,
    pub added: Option<u64>,
    pub added_by_status: Option<AddedByStatus>,
    pub metacritic: Option<u32>,
    pub playtime: Option<u32>,
    pub suggestions_count: Option<u64>,
    pub updated: Option<String>,
    pub esrb_rating: Option<EsrbRating>,
    pub platforms: Option<Vec<PlatformBinding>>,
    pub genres: Option<Vec<Genre>>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RatingBreakdown {
    pub id: Option<u32>,
    pub title: Option<String>,
    pub count: Option<u64>,
    pub percent: Option<f64>,
}

/// How many RAWG users have the game in each library state
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AddedByStatus {
    pub yet: Option<u64>,
    pub owned: Option<u64>,
    pub beaten: Option<u64>,
    pub toplay: Option<u64>,
    pub dropped: Option<u64>,
    pub playing: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct EsrbRating {
    pub id: Option<u32>,
    pub slug: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PlatformBinding {
    pub platform: Option<Platform>,
    pub released_at: Option<String>,
    pub requirements: Option<Requirements>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Platform {
    pub id: Option<u32>,
    pub slug: Option<String>,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Requirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Genre {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub games_count: Option<u64>,
    pub image_background: Option<String>,
}

/// Broad hardware family a platform slug belongs to, used for compact platform badges
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlatformFamily {
    PlayStation,
    Xbox,
    Pc,
    Mac,
    Ios,
}

impl PlatformFamily {
    /// Classify a RAWG platform slug. Order matters: "ps" is checked before "pc" and so on.
    pub fn from_slug(slug: &str) -> Option<PlatformFamily> {
        let slug = slug.to_lowercase();

        if slug.contains("playstation") || slug.contains("ps") {
            Some(PlatformFamily::PlayStation)
        } else if slug.contains("xbox") {
            Some(PlatformFamily::Xbox)
        } else if slug.contains("pc") || slug.contains("windows") {
            Some(PlatformFamily::Pc)
        } else if slug.contains("mac") || slug.contains("apple") {
            Some(PlatformFamily::Mac)
        } else if slug.contains("ios") || slug.contains("iphone") {
            Some(PlatformFamily::Ios)
        } else {
            None
        }
    }
}

impl fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlatformFamily::PlayStation => "PlayStation",
            PlatformFamily::Xbox => "Xbox",
            PlatformFamily::Pc => "PC",
            PlatformFamily::Mac => "Mac",
            PlatformFamily::Ios => "iOS",
        };
        write!(f, "{}", label)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetacriticBand {
    Favorable,
    Mixed,
    Unfavorable,
}

impl MetacriticBand {
    pub fn from_score(score: u32) -> MetacriticBand {
        if score >= 75 {
            MetacriticBand::Favorable
        } else if score >= 50 {
            MetacriticBand::Mixed
        } else {
            MetacriticBand::Unfavorable
        }
    }
}

impl GameSummary {
    /// Display name, falling back to the slug for the odd nameless record
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.slug.as_deref())
            .unwrap_or("Untitled")
    }

    /// No release date announced yet: `released` is absent or empty
    pub fn is_unannounced(&self) -> bool {
        self.released.as_deref().map(str::is_empty).unwrap_or(true)
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        self.released
            .as_deref()
            .and_then(|r| NaiveDate::parse_from_str(r, RELEASE_DATE_FORMAT).ok())
    }

    /// Short release date as shown on result cards, e.g. "19/05/2015"
    pub fn formatted_release_date(&self) -> String {
        if self.is_unannounced() {
            return "No release date".to_string();
        }

        match self.release_date() {
            Some(d) => d.format("%d/%m/%Y").to_string(),
            None => self.released.clone().unwrap_or_default(),
        }
    }

    /// Long release date as shown on the details screen, e.g. "May 19, 2015"
    pub fn long_release_date(&self) -> Option<String> {
        let raw = self.released.as_deref().filter(|r| !r.is_empty())?;

        Some(
            self.release_date()
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| raw.to_string())
        )
    }

    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated
            .as_deref()
            .and_then(|u| NaiveDateTime::parse_from_str(u, UPDATED_FORMAT).ok())
    }

    /// Distinct platform families in the order RAWG lists the platforms
    pub fn platform_families(&self) -> Vec<PlatformFamily> {
        self.platforms
            .iter()
            .flatten()
            .filter_map(|binding| binding.platform.as_ref()?.slug.as_deref())
            .filter_map(PlatformFamily::from_slug)
            .unique()
            .collect()
    }

    /// A score of 0 means RAWG has no metacritic data even when the field is present
    pub fn metacritic_band(&self) -> Option<MetacriticBand> {
        self.metacritic
            .filter(|&score| score > 0)
            .map(MetacriticBand::from_score)
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres
            .iter()
            .flatten()
            .filter_map(|g| g.name.as_deref())
            .collect()
    }
}
