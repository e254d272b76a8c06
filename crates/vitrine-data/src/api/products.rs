//! Catalog endpoints. Reads are public; writes are admin-only.

use crate::api::{ApiClient, QueryString};
use crate::ApiError;
use serde::Serialize;
use vitrine_commerce::catalog::{Category, Product, ProductVariant};
use vitrine_commerce::ids::{ProductId, VariantSku};
use vitrine_commerce::money::{serde_decimal, serde_decimal_opt, Money};

/// Query parameters for product listings.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub random_sample: Option<bool>,
}

impl ProductQuery {
    fn render(&self) -> String {
        let mut query = QueryString::new();
        query.push_opt("limit", self.limit);
        query.push_opt("skip", self.skip);
        query.push_opt("category", self.category.as_deref());
        query.push_opt("search", self.search.as_deref());
        query.push_opt("random_sample", self.random_sample);
        query.render()
    }
}

/// Product-creation request body (admin).
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub name: String,
    #[serde(with = "serde_decimal")]
    pub price: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Partial product update (admin).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "serde_decimal_opt", skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Catalog endpoint group.
pub struct ProductsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ProductsApi<'_> {
    /// List products.
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let endpoint = format!("/products/{}", query.render());
        self.client.get(&endpoint).public().fetch().await
    }

    /// Fetch a product by ID.
    pub async fn get(&self, id: &ProductId) -> Result<Product, ApiError> {
        let endpoint = format!("/products/{id}");
        self.client.get(&endpoint).public().fetch().await
    }

    /// List a product's variants.
    pub async fn variants(&self, id: &ProductId) -> Result<Vec<ProductVariant>, ApiError> {
        let endpoint = format!("/products/{id}/variants");
        self.client.get(&endpoint).public().fetch().await
    }

    /// Fetch one variant by SKU.
    pub async fn variant(
        &self,
        id: &ProductId,
        sku: &VariantSku,
    ) -> Result<ProductVariant, ApiError> {
        let endpoint = format!("/products/{id}/variant/{sku}");
        self.client.get(&endpoint).public().fetch().await
    }

    /// Fetch featured products.
    pub async fn featured(&self, limit: i64) -> Result<Vec<Product>, ApiError> {
        let endpoint = format!("/products/featured?limit={limit}");
        self.client.get(&endpoint).public().fetch().await
    }

    /// List catalog categories.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get("/products/categories").public().fetch().await
    }

    /// Create a product (admin).
    pub async fn create(&self, product: &ProductPayload) -> Result<Product, ApiError> {
        self.client.post("/products/").json(product)?.fetch().await
    }

    /// Update a product (admin).
    pub async fn update(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let endpoint = format!("/products/{id}");
        self.client.patch(&endpoint).json(update)?.fetch().await
    }

    /// Delete a product (admin).
    pub async fn delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let endpoint = format!("/products/{id}");
        self.client.delete(&endpoint).execute().await
    }
}
