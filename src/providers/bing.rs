//! Bing search provider.

use scraper::{Html, Selector};

use crate::providers::SearchProvider;

/// Bing.
///
/// The suggestion endpoint answers with an HTML document; the text
/// content of every `span`, in document order, is a suggestion.
pub struct Bing;

impl SearchProvider for Bing {
    fn suggest_url(&self, query: &str) -> String {
        format!(
            "https://www.bing.com/AS/Suggestions?cvid=1&qry={}",
            urlencoding::encode(query)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://www.bing.com/search?q={}",
            urlencoding::encode(query)
        )
    }

    fn parse_suggestions(&self, payload: &str) -> Vec<String> {
        let document = Html::parse_document(payload);
        let Ok(selector) = Selector::parse("span") else {
            return Vec::new();
        };
        document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }
}
