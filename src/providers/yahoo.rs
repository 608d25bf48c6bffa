//! Yahoo search provider.

use scraper::{Html, Selector};

use crate::providers::SearchProvider;

/// Yahoo.
///
/// The gossip endpoint answers with an XML document of `s` elements
/// carrying each completion in their `k` attribute.
pub struct Yahoo;

impl SearchProvider for Yahoo {
    fn suggest_url(&self, query: &str) -> String {
        format!(
            "https://search.yahoo.com/sugg/gossip/gossip-us-fastbreak/?command={}",
            urlencoding::encode(query)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://search.yahoo.com/search?p={}",
            urlencoding::encode(query)
        )
    }

    fn parse_suggestions(&self, payload: &str) -> Vec<String> {
        let document = Html::parse_document(payload);
        let Ok(selector) = Selector::parse("s") else {
            return Vec::new();
        };
        document
            .select(&selector)
            .filter_map(|element| element.value().attr("k"))
            .map(str::to_string)
            .collect()
    }
}
