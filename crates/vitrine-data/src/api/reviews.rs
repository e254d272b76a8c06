//! Review endpoints.

use crate::api::{ApiClient, QueryString};
use crate::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vitrine_commerce::ids::{OrderId, ProductId, ReviewId, UserId, VariantSku};

/// A product review.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: ReviewId,
    pub product_id: ProductId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub rating: i64,
    pub title: String,
    pub comment: String,
    #[serde(default)]
    pub variant_sku: Option<VariantSku>,
    #[serde(default)]
    pub verified_purchase: bool,
    #[serde(default)]
    pub helpful_count: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Aggregate review figures for a product.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewSummary {
    pub average_rating: f64,
    pub total_reviews: i64,
    /// Count of reviews per star rating, keyed "1" through "5".
    #[serde(default)]
    pub distribution: HashMap<String, i64>,
}

/// Review-creation request body.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewCreate {
    pub product_id: ProductId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    pub rating: i64,
    pub title: String,
    pub comment: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial review update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Query parameters for review listings.
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl ReviewQuery {
    fn render(&self) -> String {
        let mut query = QueryString::new();
        query.push_opt("limit", self.limit);
        query.push_opt("skip", self.skip);
        query.render()
    }
}

/// Review endpoint group.
pub struct ReviewsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ReviewsApi<'_> {
    /// List reviews for a product.
    pub async fn by_product(
        &self,
        product_id: &ProductId,
        query: &ReviewQuery,
    ) -> Result<Vec<Review>, ApiError> {
        let endpoint = format!("/reviews/product/{product_id}{}", query.render());
        self.client.get(&endpoint).public().fetch().await
    }

    /// Aggregate review figures for a product.
    pub async fn summary(&self, product_id: &ProductId) -> Result<ReviewSummary, ApiError> {
        let endpoint = format!("/reviews/product/{product_id}/summary");
        self.client.get(&endpoint).public().fetch().await
    }

    /// Create a review.
    pub async fn create(&self, review: &ReviewCreate) -> Result<Review, ApiError> {
        self.client.post("/reviews/").json(review)?.fetch().await
    }

    /// List the current user's reviews.
    pub async fn my_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>, ApiError> {
        let endpoint = format!("/reviews/my-reviews{}", query.render());
        self.client.get(&endpoint).fetch().await
    }

    /// Update a review.
    pub async fn update(
        &self,
        id: &ReviewId,
        update: &ReviewUpdate,
    ) -> Result<Review, ApiError> {
        let endpoint = format!("/reviews/{id}");
        self.client.patch(&endpoint).json(update)?.fetch().await
    }

    /// Delete a review.
    pub async fn delete(&self, id: &ReviewId) -> Result<(), ApiError> {
        let endpoint = format!("/reviews/{id}");
        self.client.delete(&endpoint).execute().await
    }

    /// Vote a review as helpful.
    pub async fn mark_helpful(&self, id: &ReviewId) -> Result<(), ApiError> {
        let endpoint = format!("/reviews/{id}/helpful");
        self.client.post(&endpoint).execute().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_wire_shape_with_defaults() {
        let review: Review = serde_json::from_str(
            r#"{"id": "r1", "product_id": "p1", "rating": 5,
                "title": "Great", "comment": "Very comfortable"}"#,
        )
        .unwrap();
        assert_eq!(review.helpful_count, 0);
        assert!(!review.verified_purchase);
        assert!(review.images.is_empty());
    }

    #[test]
    fn test_review_update_is_partial() {
        let update = ReviewUpdate {
            rating: Some(4),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"rating":4}"#);
    }

    #[test]
    fn test_summary_wire_shape() {
        let summary: ReviewSummary = serde_json::from_str(
            r#"{"average_rating": 4.5, "total_reviews": 2, "distribution": {"5": 1, "4": 1}}"#,
        )
        .unwrap();
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.distribution.get("5"), Some(&1));
    }
}
