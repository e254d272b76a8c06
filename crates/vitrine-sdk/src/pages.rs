//! Page-load glue.
//!
//! Small functions the route loaders call: they massage API data into
//! display shapes and decide redirects. Rendering stays out of this
//! crate.

use vitrine_auth::{Navigator, Route, SessionStore};
use vitrine_commerce::catalog::Product;
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::money::Money;
use vitrine_data::api::products::ProductQuery;
use vitrine_data::api::ApiClient;

/// Image shown when a product has none.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// A product reduced to what the home page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: Money,
}

impl ProductCard {
    /// Build a card from a catalog product, falling back to the
    /// placeholder image.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product
                .display_image()
                .unwrap_or(PLACEHOLDER_IMAGE)
                .to_string(),
            price: product.price,
        }
    }
}

/// Load a random sample of products for the home page.
///
/// Errors degrade to an empty list (logged); the page renders without a
/// product strip rather than failing to load.
pub async fn load_home_products(client: &ApiClient, limit: i64) -> Vec<ProductCard> {
    let query = ProductQuery {
        limit: Some(limit),
        random_sample: Some(true),
        ..Default::default()
    };

    match client.products().list(&query).await {
        Ok(products) => products.iter().map(ProductCard::from_product).collect(),
        Err(err) => {
            log::error!("failed to load home products: {}", err);
            Vec::new()
        }
    }
}

/// Register-page guard: an already-authenticated user is sent home.
///
/// Returns the route navigated to, if any, so the caller can stop its own
/// load.
pub fn redirect_if_authenticated(
    session: &SessionStore,
    navigator: &dyn Navigator,
) -> Option<Route> {
    if session.is_authenticated() {
        navigator.navigate(Route::Home);
        Some(Route::Home)
    } else {
        None
    }
}
