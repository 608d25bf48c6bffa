//! Cross-origin forwarding relay client.
//!
//! Suggestion endpoints sit on other origins, so the controller fetches
//! them through a bare-protocol relay: a single request to the relay's
//! `v1/` path carrying the real target in `x-bare-*` headers. The relay
//! replays the target's response verbatim.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::{GateError, Result};

/// Headers the relay forwards from the connecting client verbatim.
const FORWARD_HEADERS: &str = r#"["accept-encoding","connection","content-length"]"#;

/// Accept header presented to the target on the page's behalf.
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

/// Transport for fetching cross-origin suggestion data.
///
/// Implementations may speak to a bare relay or, in tests, serve canned
/// payloads.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Fetches the body of `target` and returns it as text.
    async fn fetch(&self, target: &Url) -> Result<String>;
}

/// A relay client speaking the bare v1 header protocol over reqwest.
pub struct RelayClient {
    client: Client,
    endpoint: String,
    user_agent: String,
    cookies: String,
}

impl RelayClient {
    /// Creates a client against the given relay base path, e.g.
    /// `https://portal.example/bare/`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.into(),
            user_agent: "Mozilla/5.0 (compatible; gateport/0.3)".to_string(),
            cookies: String::new(),
        }
    }

    /// Sets the user agent presented to targets through the relay.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the hosting page's cookies, forwarded in the outbound bundle.
    pub fn with_cookies(mut self, cookies: impl Into<String>) -> Self {
        self.cookies = cookies.into();
        self
    }
}

#[async_trait]
impl RelayTransport for RelayClient {
    async fn fetch(&self, target: &Url) -> Result<String> {
        let host = bare_host(target)?;
        let port = bare_port(target);
        let path = bare_path(target);
        let bundle = json!({
            "accept": ACCEPT,
            "upgrade-insecure-requests": "1",
            "user-agent": self.user_agent,
            "referer": target.as_str(),
            "Host": host,
        });

        debug!(%target, "relay fetch");
        let response = self
            .client
            .get(format!("{}v1/", self.endpoint))
            .header("cookie", self.cookies.as_str())
            .header("x-bare-forward-headers", FORWARD_HEADERS)
            .header("x-bare-headers", bundle.to_string())
            .header("x-bare-host", host.as_str())
            .header("x-bare-path", path)
            .header("x-bare-protocol", format!("{}:", target.scheme()))
            .header("x-bare-port", port.to_string())
            .send()
            .await?;
        Ok(response.text().await?)
    }
}

/// The target's host for the header bundle. Like the browser's
/// `url.host`, the port only appears when explicit in the URL.
fn bare_host(target: &Url) -> Result<String> {
    let hostname = target
        .host_str()
        .ok_or_else(|| GateError::Parse("target URL has no host".to_string()))?;
    Ok(match target.port() {
        Some(port) => format!("{hostname}:{port}"),
        None => hostname.to_string(),
    })
}

/// The target port: explicit, else the scheme default.
fn bare_port(target: &Url) -> u16 {
    match target.port() {
        Some(port) => port,
        None if target.scheme() == "https" => 443,
        None => 80,
    }
}

/// Path plus query string, as the relay expects them.
fn bare_path(target: &Url) -> String {
    let mut path = target.path().to_string();
    if let Some(query) = target.query() {
        path.push('?');
        path.push_str(query);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_host_without_port() {
        let target = Url::parse("https://duckduckgo.com/ac/?q=x").unwrap();
        assert_eq!(bare_host(&target).unwrap(), "duckduckgo.com");
    }

    #[test]
    fn test_bare_host_with_explicit_port() {
        let target = Url::parse("https://example.com:8443/x").unwrap();
        assert_eq!(bare_host(&target).unwrap(), "example.com:8443");
    }

    #[test]
    fn test_bare_port_defaults_by_scheme() {
        assert_eq!(bare_port(&Url::parse("https://example.com/").unwrap()), 443);
        assert_eq!(bare_port(&Url::parse("http://example.com/").unwrap()), 80);
        assert_eq!(
            bare_port(&Url::parse("http://example.com:8080/").unwrap()),
            8080
        );
    }

    #[test]
    fn test_bare_path_includes_query() {
        let target = Url::parse("https://duckduckgo.com/ac/?q=rust+lang").unwrap();
        assert_eq!(bare_path(&target), "/ac/?q=rust+lang");
    }

    #[test]
    fn test_bare_path_without_query() {
        let target = Url::parse("https://example.com/suggest").unwrap();
        assert_eq!(bare_path(&target), "/suggest");
    }

    #[test]
    fn test_relay_client_builders() {
        let client = RelayClient::new("https://portal.example/bare/")
            .with_user_agent("test-agent")
            .with_cookies("session=1");
        assert_eq!(client.endpoint, "https://portal.example/bare/");
        assert_eq!(client.user_agent, "test-agent");
        assert_eq!(client.cookies, "session=1");
    }

    #[test]
    fn test_forward_headers_constant_is_json() {
        let parsed: Vec<String> = serde_json::from_str(FORWARD_HEADERS).unwrap();
        assert_eq!(
            parsed,
            vec!["accept-encoding", "connection", "content-length"]
        );
    }
}
