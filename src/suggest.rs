//! Suggestion fetching with cancellation-based race safety.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{AbortHandle, Abortable};
use tracing::{debug, warn};
use url::Url;

use crate::relay::RelayTransport;
use crate::settings::SettingsStore;

/// Most suggestions ever rendered at once.
pub const MAX_RENDERED: usize = 5;

/// Rendering surface for the suggestion panel.
pub trait SuggestionView: Send + Sync {
    /// Replaces the rendered suggestion rows.
    fn render(&self, suggestions: &[String]);

    /// Shows the panel.
    fn show(&self);

    /// Hides the panel.
    fn hide(&self);
}

/// Outcome of a suggestion update.
///
/// Failures on this path are policy, not errors: a superseded, failed,
/// or unparsable fetch leaves the previous rendering untouched and
/// reports `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionUpdate {
    /// Fetched and rendered this many suggestions, capped at
    /// [`MAX_RENDERED`].
    Rendered(usize),
    /// Input emptied: list cleared, panel hidden, nothing fetched.
    Cleared,
    /// The fetch was superseded or failed; prior state left as-is.
    Ignored,
}

struct Inner {
    current: Option<AbortHandle>,
    suggestions: Vec<String>,
}

/// Debounced-by-cancellation autocomplete driver.
///
/// At most one fetch is logically current. Issuing a new one aborts the
/// previous in-flight request before anything is sent, so a stale
/// response can never repaint the panel. Activating a rendered
/// suggestion is wired by the embedder to the navigator with the
/// suggestion's literal text.
pub struct SuggestionController {
    settings: SettingsStore,
    transport: Arc<dyn RelayTransport>,
    view: Arc<dyn SuggestionView>,
    inner: Mutex<Inner>,
}

impl SuggestionController {
    /// Creates a controller fetching through `transport` and rendering
    /// into `view`.
    pub fn new(
        settings: SettingsStore,
        transport: Arc<dyn RelayTransport>,
        view: Arc<dyn SuggestionView>,
    ) -> Self {
        Self {
            settings,
            transport,
            view,
            inner: Mutex::new(Inner {
                current: None,
                suggestions: Vec::new(),
            }),
        }
    }

    /// The full suggestion list from the last successful fetch.
    pub fn suggestions(&self) -> Vec<String> {
        self.lock().suggestions.clone()
    }

    /// Reacts to the input field changing to `query`.
    pub async fn update(&self, query: &str) -> SuggestionUpdate {
        if query.is_empty() {
            // Cancel in-flight work too, so a late response cannot
            // repaint after the clear.
            let mut inner = self.lock();
            if let Some(handle) = inner.current.take() {
                handle.abort();
            }
            inner.suggestions.clear();
            drop(inner);
            self.view.hide();
            return SuggestionUpdate::Cleared;
        }

        let settings = self.settings.load();
        let provider = settings.search_engine.provider();
        let target = match Url::parse(&provider.suggest_url(query)) {
            Ok(url) => url,
            Err(e) => {
                warn!("suggestion endpoint did not parse: {e}");
                return SuggestionUpdate::Ignored;
            }
        };

        // Abort the previous fetch and install the new handle in one
        // step, with no suspension in between.
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.lock().current.replace(handle) {
            previous.abort();
        }

        let fetch = Abortable::new(self.transport.fetch(&target), registration);
        let payload = match fetch.await {
            Ok(Ok(payload)) => payload,
            Ok(Err(e)) => {
                warn!("suggestion fetch failed: {e}");
                return SuggestionUpdate::Ignored;
            }
            Err(_) => {
                debug!("suggestion fetch superseded");
                return SuggestionUpdate::Ignored;
            }
        };

        // No suspension from here to the commit: a newer fetch cannot
        // start between the abortable resolving and this write.
        let values = provider.parse_suggestions(&payload);
        let mut inner = self.lock();
        inner.suggestions = values;
        let rendered: Vec<String> = inner
            .suggestions
            .iter()
            .take(MAX_RENDERED)
            .cloned()
            .collect();
        drop(inner);

        self.view.render(&rendered);
        if !rendered.is_empty() {
            self.view.show();
        }
        SuggestionUpdate::Rendered(rendered.len())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("suggestion state poisoned")
    }
}
