//! Search provider implementations.

mod bing;
mod brave;
mod duckduckgo;
mod google;
mod yahoo;

pub use bing::Bing;
pub use brave::Brave;
pub use duckduckgo::DuckDuckGo;
pub use google::Google;
pub use yahoo::Yahoo;

use serde::{Deserialize, Serialize};

/// Identifier of a search provider.
///
/// The set is closed: providers are statically enumerated and there is no
/// runtime registration. The id always originates from validated settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    #[default]
    Google,
    Brave,
    Bing,
    DuckDuckGo,
    Yahoo,
}

impl ProviderId {
    /// Resolves the id to its provider implementation.
    pub fn provider(self) -> &'static dyn SearchProvider {
        match self {
            ProviderId::Google => &Google,
            ProviderId::Brave => &Brave,
            ProviderId::Bing => &Bing,
            ProviderId::DuckDuckGo => &DuckDuckGo,
            ProviderId::Yahoo => &Yahoo,
        }
    }
}

/// A search engine integration: autocomplete endpoint, results page, and
/// suggestion payload parsing.
///
/// Payload shapes differ wildly between providers (bare JSON arrays,
/// JSON-with-padding, HTML and XML documents); `parse_suggestions`
/// normalizes them all to a flat, ordered list of plain strings and
/// degrades to an empty list on anything malformed.
pub trait SearchProvider: Send + Sync {
    /// Returns the autocomplete endpoint URL for `query`.
    ///
    /// The query is percent-encoded before interpolation.
    fn suggest_url(&self, query: &str) -> String;

    /// Returns the provider's human search-results URL for `query`.
    fn search_url(&self, query: &str) -> String;

    /// Extracts plain-text suggestions from a raw response body.
    ///
    /// Never panics; malformed payloads yield an empty list.
    fn parse_suggestions(&self, payload: &str) -> Vec<String>;
}
