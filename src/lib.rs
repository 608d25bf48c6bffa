//! # gateport
//!
//! Client-side controller for a web-proxy "unblocker" front end.
//!
//! The crate turns free-text input into a destination URL, routes that
//! URL through a rewriting proxy backend, and drives cancellable
//! search-suggestion autocomplete through a forwarding relay:
//!
//! - Keystrokes go to the [`SuggestionController`], which looks up the
//!   active provider, fetches through the relay, parses the payload,
//!   and renders the top results, cancelling any superseded fetch.
//! - Submissions go to the [`Navigator`], which resolves shortcuts,
//!   activates the selected backend's background worker, encodes the
//!   destination, and places it in a tab, window, or cloaked frame.
//!
//! The hosting environment (worker registration, window placement, the
//! visible UI) is reached through traits, so the whole pipeline runs
//! headless in tests.
//!
//! ## Example
//!
//! ```rust
//! use gateport::{normalize, PageContext, providers::ProviderId};
//!
//! let page = PageContext::new("https", "https://portal.example");
//! let provider = ProviderId::DuckDuckGo.provider();
//!
//! assert_eq!(normalize("example.com", &page, provider), "https://example.com");
//! assert_eq!(
//!     normalize("rust programming", &page, provider),
//!     "https://duckduckgo.com/?q=rust%20programming"
//! );
//! ```

mod error;
mod navigator;
mod normalize;
mod proxy;
mod relay;
mod settings;
mod store;
mod suggest;

pub mod providers;

pub use error::{GateError, Result};
pub use navigator::{
    NavigationOutcome, NavigationUi, Navigator, OpenMode, Placement, WindowShell, WorkerHost,
};
pub use normalize::{normalize, PageContext};
pub use proxy::{ProxyBackend, ProxyId, Uv};
pub use relay::{RelayClient, RelayTransport};
pub use settings::{
    AdBlock, DisplayMode, Settings, SettingsStore, TabCloak, Theme, SETTINGS_KEY,
};
pub use store::{BlobStore, MemoryBlobStore};
pub use suggest::{SuggestionController, SuggestionUpdate, SuggestionView, MAX_RENDERED};
