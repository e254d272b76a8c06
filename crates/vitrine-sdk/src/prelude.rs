//! Prelude for convenient imports.

pub use vitrine_commerce::prelude::*;

pub use vitrine_data::api::{ApiClient, ApiConfig};
pub use vitrine_data::credentials::{CredentialStore, MemoryCredentialStore};
#[cfg(target_arch = "wasm32")]
pub use vitrine_data::credentials::WebCredentialStore;
pub use vitrine_data::{ApiError, FetchError};

pub use vitrine_auth::{
    ApiAuthGateway, AuthError, AuthGateway, Navigator, RecordingNavigator, Role, Route,
    SessionState, SessionStore, User,
};
#[cfg(target_arch = "wasm32")]
pub use vitrine_auth::WebNavigator;

pub use crate::pages::{load_home_products, redirect_if_authenticated, ProductCard};
