//! Free-text input classification.

use std::sync::LazyLock;

use regex::Regex;

use crate::providers::SearchProvider;

static ABSOLUTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://(\S+\.)+\S+$").expect("valid pattern"));

static BARE_DOMAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+\.)+\S+$").expect("valid pattern"));

/// The hosting page's location, as far as routing needs it.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Scheme without the trailing colon, e.g. `https`.
    pub scheme: String,
    /// Origin of the hosting page, e.g. `https://portal.example`.
    pub origin: String,
}

impl PageContext {
    /// Creates a context from the hosting page's scheme and origin.
    pub fn new(scheme: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            origin: origin.into(),
        }
    }
}

/// Turns trimmed free text into a destination URL.
///
/// Absolute http(s) URLs pass through untouched, host-like input is
/// given the page's scheme, and anything else becomes a search on the
/// active provider. The domain heuristic is deliberately permissive:
/// any dotted, whitespace-free token routes as a host, "file.name"
/// included.
pub fn normalize(input: &str, page: &PageContext, provider: &dyn SearchProvider) -> String {
    let value = input.trim();
    if ABSOLUTE_URL.is_match(value) {
        value.to_string()
    } else if BARE_DOMAIN.is_match(value) {
        format!("{}://{}", page.scheme, value)
    } else {
        provider.search_url(value)
    }
}
