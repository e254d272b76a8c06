//! Wishlist endpoints. All of them require authentication.

use crate::api::ApiClient;
use crate::ApiError;
use serde::Deserialize;
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::ProductId;

/// The wishlist as the API returns it: product IDs plus a count.
#[derive(Debug, Clone, Deserialize)]
pub struct Wishlist {
    #[serde(default)]
    pub products: Vec<ProductId>,
    pub count: i64,
}

/// Outcome of a wishlist mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistStatus {
    #[serde(default)]
    pub success: bool,
    pub count: i64,
    /// Set by `toggle`: whether the product ended up in the wishlist.
    #[serde(default)]
    pub added: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Membership check result.
#[derive(Debug, Clone, Deserialize)]
pub struct WishlistCheck {
    pub in_wishlist: bool,
}

/// Wishlist endpoint group.
pub struct WishlistApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl WishlistApi<'_> {
    /// Fetch the current user's wishlist.
    pub async fn get(&self) -> Result<Wishlist, ApiError> {
        self.client.get("/wishlist/").fetch().await
    }

    /// Fetch the wishlist resolved to full products.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.client.get("/wishlist/products").fetch().await
    }

    /// Add a product.
    pub async fn add(&self, product_id: &ProductId) -> Result<WishlistStatus, ApiError> {
        let endpoint = format!("/wishlist/add/{product_id}");
        self.client.post(&endpoint).fetch().await
    }

    /// Remove a product.
    pub async fn remove(&self, product_id: &ProductId) -> Result<WishlistStatus, ApiError> {
        let endpoint = format!("/wishlist/remove/{product_id}");
        self.client.delete(&endpoint).fetch().await
    }

    /// Toggle a product in or out of the wishlist.
    pub async fn toggle(&self, product_id: &ProductId) -> Result<WishlistStatus, ApiError> {
        let endpoint = format!("/wishlist/toggle/{product_id}");
        self.client.post(&endpoint).fetch().await
    }

    /// Check whether a product is wishlisted.
    pub async fn check(&self, product_id: &ProductId) -> Result<WishlistCheck, ApiError> {
        let endpoint = format!("/wishlist/check/{product_id}");
        self.client.get(&endpoint).fetch().await
    }

    /// Empty the wishlist.
    pub async fn clear(&self) -> Result<(), ApiError> {
        self.client.delete("/wishlist/clear").execute().await
    }
}
