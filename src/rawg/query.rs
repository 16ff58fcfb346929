
use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const GAMES_PATH: &str = "/games";

/// Characters that would end or corrupt a query value. Non-ASCII is always escaped.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Filters for one call to the games list endpoint. Values are passed to RAWG uninterpreted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CatalogQuery {
    /// RAWG date range syntax, e.g. "2019-09-01,2019-09-30"
    pub release_dates: Option<String>,
    /// Comma-separated RAWG platform ids, e.g. "4,187"
    pub platforms: Option<String>,
    pub search_text: Option<String>,
}

impl CatalogQuery {
    pub fn search(text: &str) -> CatalogQuery {
        CatalogQuery { search_text: Some(text.to_string()), ..Default::default() }
    }

    pub fn with_release_dates(mut self, dates: &str) -> CatalogQuery {
        self.release_dates = Some(dates.to_string());
        self
    }

    pub fn with_platforms(mut self, platforms: &str) -> CatalogQuery {
        self.platforms = Some(platforms.to_string());
        self
    }

    /// Query string pairs in the order they are sent: key, dates, platforms, search
    pub(crate) fn encoded_pairs(&self, api_key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("key", encode(api_key))];

        if let Some(dates) = &self.release_dates {
            pairs.push(("dates", encode(dates)));
        }
        if let Some(platforms) = &self.platforms {
            pairs.push(("platforms", encode(platforms)));
        }
        if let Some(text) = &self.search_text {
            pairs.push(("search", encode_search_text(text)));
        }

        pairs
    }

    pub(crate) fn url(&self, base_url: &str, api_key: &str) -> String {
        let query = self
            .encoded_pairs(api_key)
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .join("&");

        format!("{}{}?{}", base_url.trim_end_matches('/'), GAMES_PATH, query)
    }
}

/// RAWG takes spaces in search text as `+`. Anything else is only percent-encoded where a
/// query string requires it, so the text RAWG decodes is the text the user typed.
pub fn encode_search_text(text: &str) -> String {
    text.split(' ').map(encode).join("+")
}
