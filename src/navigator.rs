//! Navigation orchestration: worker activation, proxy routing, and
//! window placement.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::normalize::PageContext;
use crate::settings::{DisplayMode, SettingsStore, TabCloak};
use crate::{GateError, Result};

/// Placement of a newly opened browsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A regular tab.
    Tab,
    /// A popup window pinned to the top-left corner.
    PositionedWindow,
}

/// How a completed navigation was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// The current document was pointed at the destination.
    CurrentTab,
    /// A new browsing context was opened on the destination.
    NewWindow,
    /// A decoy context embedding the destination in a frame.
    Cloaked,
}

/// Outcome of a [`Navigator::navigate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Empty input, or a navigation already in flight. Nothing happened.
    Ignored,
    /// Navigation completed.
    Opened(OpenMode),
    /// Worker activation failed or the runtime lacks worker support; an
    /// error state was surfaced to the UI.
    Failed,
}

/// Background worker activation, the asynchronous half of proxy setup.
#[async_trait]
pub trait WorkerHost: Send + Sync {
    /// Whether this runtime can register background workers at all.
    fn supported(&self) -> bool;

    /// Registers the worker at `script` under `scope`.
    ///
    /// The error message is surfaced to the user verbatim.
    async fn register(&self, script: &str, scope: &str) -> Result<()>;
}

/// Window and tab placement primitives of the hosting environment.
pub trait WindowShell: Send + Sync {
    /// Points the current document at `url`.
    fn navigate_current(&self, url: &str);

    /// Opens a new browsing context on `url`.
    fn open_window(&self, url: &str, placement: Placement);

    /// Opens a blank browsing context and writes `html` into it. The
    /// context's visible location stays blank.
    fn open_document(&self, html: &str, placement: Placement);
}

/// Loading / error / input surface of the hosting page.
pub trait NavigationUi: Send + Sync {
    /// Toggles the loading indicator.
    fn set_loading(&self, active: bool);

    /// Surfaces an error message.
    fn show_error(&self, message: &str);

    /// Clears the input field.
    fn clear_input(&self);
}

/// Drives a user submission end to end: shortcut resolution, worker
/// activation, proxy routing, and window placement.
pub struct Navigator {
    settings: SettingsStore,
    worker: Arc<dyn WorkerHost>,
    shell: Arc<dyn WindowShell>,
    ui: Arc<dyn NavigationUi>,
    page: PageContext,
    in_flight: AtomicBool,
}

impl Navigator {
    /// Creates a navigator over the hosting environment's collaborators.
    pub fn new(
        settings: SettingsStore,
        worker: Arc<dyn WorkerHost>,
        shell: Arc<dyn WindowShell>,
        ui: Arc<dyn NavigationUi>,
        page: PageContext,
    ) -> Self {
        Self {
            settings,
            worker,
            shell,
            ui,
            page,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Navigates to whatever `raw` resolves to.
    ///
    /// Empty input is a silent no-op. A call arriving while a previous
    /// navigation is still in flight is ignored rather than raced.
    pub async fn navigate(&self, raw: &str) -> NavigationOutcome {
        let value = raw.trim();
        if value.is_empty() {
            return NavigationOutcome::Ignored;
        }
        if !self.worker.supported() {
            self.ui
                .show_error(&format!("Error: {}", GateError::WorkersUnsupported));
            return NavigationOutcome::Failed;
        }
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!(input = value, "navigation already in flight, ignoring");
            return NavigationOutcome::Ignored;
        }
        let outcome = self.run(value).await;
        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }

    async fn run(&self, value: &str) -> NavigationOutcome {
        let settings = self.settings.load();
        // An exact shortcut match substitutes its destination before any
        // other processing.
        let destination = settings
            .shortcuts
            .get(value)
            .map(String::as_str)
            .unwrap_or(value);

        let backend = settings.proxy.backend();
        self.ui.set_loading(true);
        if let Err(e) = self
            .worker
            .register(backend.worker_script(), backend.scope())
            .await
        {
            warn!("worker activation failed: {e}");
            self.ui.set_loading(false);
            self.ui.show_error(&format!("Error: {e}"));
            return NavigationOutcome::Failed;
        }

        let provider = settings.search_engine.provider();
        let url = backend.route(destination, &self.page, provider);
        debug!(%url, "routing destination");

        match settings.tab_cloak {
            TabCloak::None => {
                if settings.display == DisplayMode::Default {
                    // The document is navigating away; the loading
                    // indicator stays up until it does.
                    self.shell.navigate_current(&url);
                    NavigationOutcome::Opened(OpenMode::CurrentTab)
                } else {
                    self.shell.open_window(&url, Placement::PositionedWindow);
                    self.ui.set_loading(false);
                    self.ui.clear_input();
                    NavigationOutcome::Opened(OpenMode::NewWindow)
                }
            }
            TabCloak::Blank => {
                let placement = if settings.display == DisplayMode::Default {
                    Placement::Tab
                } else {
                    Placement::PositionedWindow
                };
                let html = cloak_document(&format!("{}{}", self.page.origin, url));
                self.shell.open_document(&html, placement);
                self.ui.set_loading(false);
                self.ui.clear_input();
                NavigationOutcome::Opened(OpenMode::Cloaked)
            }
        }
    }
}

/// The decoy document: a margin-reset page whose only content is a
/// full-viewport borderless frame on the real destination.
fn cloak_document(src: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><style>body{{margin:0}}</style></head>\
         <body><iframe src=\"{src}\" style=\"width:100%;height:100%;border:none\"></iframe></body></html>"
    )
}
