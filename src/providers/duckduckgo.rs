//! DuckDuckGo search provider.

use serde::Deserialize;

use crate::providers::SearchProvider;

/// DuckDuckGo.
///
/// Suggestions are a JSON array of `{"phrase": ...}` objects.
pub struct DuckDuckGo;

#[derive(Deserialize)]
struct Completion {
    phrase: String,
}

impl SearchProvider for DuckDuckGo {
    fn suggest_url(&self, query: &str) -> String {
        format!("https://duckduckgo.com/ac/?q={}", urlencoding::encode(query))
    }

    fn search_url(&self, query: &str) -> String {
        format!("https://duckduckgo.com/?q={}", urlencoding::encode(query))
    }

    fn parse_suggestions(&self, payload: &str) -> Vec<String> {
        serde_json::from_str::<Vec<Completion>>(payload)
            .map(|completions| completions.into_iter().map(|c| c.phrase).collect())
            .unwrap_or_default()
    }
}
