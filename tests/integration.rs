//! Integration tests using real HTTP requests.
//!
//! These tests are marked with `#[ignore]` by default because they require
//! network access and may be slow or flaky.
//!
//! Run with: `cargo test --test integration -- --ignored`

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use gateport::{
    providers::ProviderId, GateError, MemoryBlobStore, Result, Settings, SettingsStore,
    SuggestionController, SuggestionView, RelayTransport,
};

/// Fetches suggestion targets directly instead of through a bare relay,
/// so live provider payloads can be exercised without standing one up.
struct DirectTransport {
    client: reqwest::Client,
}

impl DirectTransport {
    fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (compatible; gateport/0.3)")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl RelayTransport for DirectTransport {
    async fn fetch(&self, target: &Url) -> Result<String> {
        let response = self.client.get(target.clone()).send().await?;
        Ok(response.text().await?)
    }
}

/// Prints what would be rendered, panel state included.
#[derive(Default)]
struct PrintingView {
    last: Mutex<Vec<String>>,
}

impl SuggestionView for PrintingView {
    fn render(&self, suggestions: &[String]) {
        println!("rendered {} suggestions:", suggestions.len());
        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion);
        }
        *self.last.lock().unwrap() = suggestions.to_vec();
    }

    fn show(&self) {
        println!("panel shown");
    }

    fn hide(&self) {
        println!("panel hidden");
    }
}

/// Helper to run a live suggestion fetch against one provider.
async fn live_suggestions(id: ProviderId, query: &str) -> Vec<String> {
    let provider = id.provider();
    let transport = DirectTransport::new();
    let target = Url::parse(&provider.suggest_url(query)).expect("suggest URL parses");
    match transport.fetch(&target).await {
        Ok(payload) => {
            let values = provider.parse_suggestions(&payload);
            println!("{id:?} returned {} suggestions for '{query}'", values.len());
            for value in values.iter().take(3) {
                println!("  - {value}");
            }
            values
        }
        Err(e) => {
            println!("{id:?} fetch failed: {e}");
            Vec::new()
        }
    }
}

mod provider_live {
    use super::*;

    #[tokio::test]
    #[ignore]
    async fn test_duckduckgo_suggestions() {
        let values = live_suggestions(ProviderId::DuckDuckGo, "rust").await;
        assert!(!values.is_empty(), "DuckDuckGo should return suggestions");
    }

    #[tokio::test]
    #[ignore]
    async fn test_brave_suggestions() {
        let values = live_suggestions(ProviderId::Brave, "rust").await;
        assert!(!values.is_empty(), "Brave should return suggestions");
    }

    #[tokio::test]
    #[ignore]
    async fn test_bing_suggestions() {
        let values = live_suggestions(ProviderId::Bing, "rust").await;
        // Bing occasionally serves an empty shell to unrecognized
        // clients; just exercise the parse.
        println!("bing returned {} suggestions", values.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_yahoo_suggestions() {
        let values = live_suggestions(ProviderId::Yahoo, "rust").await;
        println!("yahoo returned {} suggestions", values.len());
    }

    #[tokio::test]
    #[ignore]
    async fn test_google_suggestions() {
        let values = live_suggestions(ProviderId::Google, "rust").await;
        println!("google returned {} suggestions", values.len());
    }
}

mod controller_live {
    use super::*;
    use gateport::{SuggestionUpdate, MAX_RENDERED, SETTINGS_KEY};
    use gateport::BlobStore;

    #[tokio::test]
    #[ignore]
    async fn test_end_to_end_suggestion_update() {
        let blob_store = Arc::new(MemoryBlobStore::new());
        let settings = Settings {
            search_engine: ProviderId::DuckDuckGo,
            ..Default::default()
        };
        blob_store.set(SETTINGS_KEY, &serde_json::to_string(&settings).unwrap());

        let view = Arc::new(PrintingView::default());
        let controller = SuggestionController::new(
            SettingsStore::new(blob_store),
            Arc::new(DirectTransport::new()),
            view.clone(),
        );

        let update = controller.update("rust").await;
        match update {
            SuggestionUpdate::Rendered(count) => {
                assert!(count <= MAX_RENDERED);
                assert_eq!(view.last.lock().unwrap().len(), count);
            }
            other => panic!("expected a render, got {other:?}"),
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_transport_error_is_swallowed() {
        let blob_store = Arc::new(MemoryBlobStore::new());
        let view = Arc::new(PrintingView::default());
        // An unroutable relay endpoint: every fetch fails, none of them
        // surface.
        let controller = SuggestionController::new(
            SettingsStore::new(blob_store),
            Arc::new(gateport::RelayClient::new("http://127.0.0.1:1/bare/")),
            view,
        );
        let update = controller.update("rust").await;
        assert_eq!(update, SuggestionUpdate::Ignored);
    }
}

#[test]
fn test_error_converts_from_reqwest() {
    // Compile-time check that transports can use `?` on reqwest calls.
    fn _adapt(e: reqwest::Error) -> GateError {
        e.into()
    }
}
