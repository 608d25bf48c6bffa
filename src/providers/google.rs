//! Google search provider.

use scraper::Html;
use serde_json::Value;

use crate::providers::SearchProvider;

/// Google.
///
/// The gws-wiz suggestion endpoint answers with JSON-with-padding, and
/// each suggestion is an HTML fragment (matched portions wrapped in
/// `<b>` tags) whose text content is the suggestion itself.
pub struct Google;

impl SearchProvider for Google {
    fn suggest_url(&self, query: &str) -> String {
        format!(
            "https://www.google.com/complete/search?client=gws-wiz&q={}",
            urlencoding::encode(query)
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "https://www.google.com/search?q={}",
            urlencoding::encode(query)
        )
    }

    fn parse_suggestions(&self, payload: &str) -> Vec<String> {
        let Ok(value) = serde_json::from_str::<Value>(strip_padding(payload)) else {
            return Vec::new();
        };
        let Some(entries) = value.get(0).and_then(Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .filter_map(|entry| entry.get(0).and_then(Value::as_str))
            .map(fragment_text)
            .collect()
    }
}

/// Strips the JSONP wrapper, leaving the array literal.
fn strip_padding(payload: &str) -> &str {
    let body = match payload.find('(') {
        Some(index) => &payload[index + 1..],
        None => payload,
    };
    let body = body.trim_end();
    body.strip_suffix(')').unwrap_or(body)
}

/// Text content of an HTML fragment, tags dropped.
fn fragment_text(fragment: &str) -> String {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_url_encodes_query() {
        let url = Google.suggest_url("rust lang");
        assert_eq!(
            url,
            "https://www.google.com/complete/search?client=gws-wiz&q=rust%20lang"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = Google.search_url("a&b");
        assert_eq!(url, "https://www.google.com/search?q=a%26b");
    }

    #[test]
    fn test_parse_suggestions_jsonp() {
        let payload = r#"window.google.ac.h([[["<b>rust</b> programming",0],["rust <b>lang</b>uage",0]],{"q":"x"}])"#;
        let values = Google.parse_suggestions(payload);
        assert_eq!(values, vec!["rust programming", "rust language"]);
    }

    #[test]
    fn test_parse_suggestions_plain_fragment() {
        let payload = r#"ac([[["no markup here",0]]])"#;
        let values = Google.parse_suggestions(payload);
        assert_eq!(values, vec!["no markup here"]);
    }

    #[test]
    fn test_parse_suggestions_unpadded_array() {
        let payload = r#"[[["bare",0]]]"#;
        let values = Google.parse_suggestions(payload);
        assert_eq!(values, vec!["bare"]);
    }

    #[test]
    fn test_parse_suggestions_malformed() {
        assert!(Google.parse_suggestions("not json at all").is_empty());
        assert!(Google.parse_suggestions("cb({\"a\":1})").is_empty());
        assert!(Google.parse_suggestions("").is_empty());
    }

    #[test]
    fn test_parse_suggestions_skips_non_string_entries() {
        let payload = r#"cb([[["ok",0],[42,0]]])"#;
        let values = Google.parse_suggestions(payload);
        assert_eq!(values, vec!["ok"]);
    }

    #[test]
    fn test_strip_padding() {
        assert_eq!(strip_padding("cb([1,2])"), "[1,2]");
        assert_eq!(strip_padding("[1,2]"), "[1,2]");
        assert_eq!(strip_padding("cb([1,2])  "), "[1,2]");
    }

    #[test]
    fn test_fragment_text() {
        assert_eq!(fragment_text("<b>bold</b> rest"), "bold rest");
        assert_eq!(fragment_text("plain"), "plain");
    }
}
