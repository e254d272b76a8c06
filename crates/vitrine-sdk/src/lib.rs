//! # Vitrine SDK
//!
//! The browser-side data layer of the Vitrine storefront, in one import:
//! the API client, the session store, the cart store, and the page-load
//! glue the routes use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vitrine_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! // Wire the capabilities once, at startup
//! let credentials: Arc<dyn CredentialStore> = Arc::new(WebCredentialStore::new());
//! let client = ApiClient::new(ApiConfig::default(), credentials.clone());
//!
//! let mut session = SessionStore::new(
//!     Arc::new(ApiAuthGateway::new(client.clone())),
//!     credentials,
//!     Arc::new(WebNavigator::new()),
//! );
//! session.initialize().await;
//!
//! let mut cart = CartStore::new();
//! ```

pub mod pages;
pub mod prelude;

// Re-export the layer crates
pub use vitrine_auth;
pub use vitrine_commerce;
pub use vitrine_data;

// Re-export the store types at the top level for convenience
pub use vitrine_auth::{ApiAuthGateway, SessionStore};
pub use vitrine_commerce::cart::CartStore;
pub use vitrine_data::api::{ApiClient, ApiConfig};

/// Install the console logger and panic hook. Call once at hydration.
#[cfg(target_arch = "wasm32")]
pub fn init_console_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
