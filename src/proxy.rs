//! Proxy backend registry and URL routing.
//!
//! A backend is a network-rewriting integration: a background worker
//! that intercepts traffic under its activation scope, plus an opaque
//! encoding for destination URLs. Backends are statically enumerated;
//! the navigator only ever talks to the [`ProxyBackend`] trait, so new
//! backends slot in without touching any caller.

use serde::{Deserialize, Serialize};

use crate::normalize::{normalize, PageContext};
use crate::providers::SearchProvider;

/// Identifier of a network-rewriting backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyId {
    /// Ultraviolet-style rewriting worker.
    #[default]
    Uv,
}

impl ProxyId {
    /// Resolves the id to its backend descriptor.
    pub fn backend(self) -> &'static dyn ProxyBackend {
        match self {
            ProxyId::Uv => &Uv,
        }
    }
}

/// A network-rewriting backend.
pub trait ProxyBackend: Send + Sync {
    /// Location of the backend's background worker script.
    fn worker_script(&self) -> &'static str;

    /// Scope the worker activates under; also the path prefix of every
    /// encoded destination.
    fn scope(&self) -> &'static str;

    /// Encodes a destination URL into the backend's opaque path form.
    fn encode(&self, url: &str) -> String;

    /// Routes raw input to a proxied path: normalizes it to a
    /// destination URL, encodes that, and prefixes the activation scope.
    fn route(&self, value: &str, page: &PageContext, provider: &dyn SearchProvider) -> String {
        let url = normalize(value, page, provider);
        format!("{}{}", self.scope(), self.encode(&url))
    }
}

/// The Ultraviolet backend.
pub struct Uv;

impl ProxyBackend for Uv {
    fn worker_script(&self) -> &'static str {
        "/uv.sw.js"
    }

    fn scope(&self) -> &'static str {
        "/service/"
    }

    fn encode(&self, url: &str) -> String {
        xor_encode(url)
    }
}

/// Ultraviolet's xor codec: every odd-indexed character flipped with 2,
/// the result percent-encoded.
fn xor_encode(url: &str) -> String {
    let mixed: String = url
        .chars()
        .enumerate()
        .map(|(index, c)| {
            if index % 2 == 1 {
                char::from_u32((c as u32) ^ 2).unwrap_or(c)
            } else {
                c
            }
        })
        .collect();
    urlencoding::encode(&mixed).into_owned()
}
