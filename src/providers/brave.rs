//! Brave search provider.

use serde_json::Value;

use crate::providers::SearchProvider;

/// Brave.
///
/// Suggestions come back as a bare JSON pair: the echoed query followed
/// by the completion list.
pub struct Brave;

impl SearchProvider for Brave {
    fn suggest_url(&self, query: &str) -> String {
        format!(
            "https://search.brave.com/api/suggest?q={}",
            urlencoding::encode(query)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://search.brave.com/search?q={}",
            urlencoding::encode(query)
        )
    }

    fn parse_suggestions(&self, payload: &str) -> Vec<String> {
        let Ok(value) = serde_json::from_str::<Value>(payload) else {
            return Vec::new();
        };
        value
            .get(1)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}
