//! Coupon endpoints. Validation is public; management is admin-only.

use crate::api::{ApiClient, QueryString};
use crate::ApiError;
use serde::{Deserialize, Serialize};
use vitrine_commerce::ids::CouponCode;
use vitrine_commerce::money::{serde_decimal, serde_decimal_opt, Money};

/// Discount kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// Percentage off the subtotal.
    Percentage,
    /// Fixed amount off the subtotal.
    Fixed,
}

/// Coupon validation request body.
#[derive(Debug, Clone, Serialize)]
pub struct CouponValidateRequest {
    pub code: CouponCode,
    #[serde(with = "serde_decimal")]
    pub subtotal: Money,
}

/// Result of validating a coupon against a subtotal.
#[derive(Debug, Clone, Deserialize)]
pub struct CouponValidation {
    pub valid: bool,
    pub code: CouponCode,
    #[serde(default)]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(with = "serde_decimal")]
    pub discount_amount: Money,
    #[serde(with = "serde_decimal")]
    pub new_total: Money,
    #[serde(default, with = "serde_decimal_opt")]
    pub minimum_amount: Option<Money>,
}

/// A coupon, as the admin endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub code: CouponCode,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default, with = "serde_decimal_opt")]
    pub minimum_amount: Option<Money>,
    #[serde(default, with = "serde_decimal_opt")]
    pub maximum_discount: Option<Money>,
    #[serde(default)]
    pub max_uses: Option<i64>,
    #[serde(default)]
    pub times_used: Option<i64>,
    pub is_active: bool,
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_until: Option<String>,
}

/// Coupon-creation request body (admin).
#[derive(Debug, Clone, Serialize)]
pub struct CouponPayload {
    pub code: CouponCode,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(with = "serde_decimal_opt", skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Money>,
    #[serde(with = "serde_decimal_opt", skip_serializing_if = "Option::is_none")]
    pub maximum_discount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    pub valid_from: String,
    pub valid_until: String,
    pub is_active: bool,
}

/// Partial coupon update (admin).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CouponUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,
    #[serde(with = "serde_decimal_opt", skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
}

/// Coupon endpoint group.
pub struct CouponsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CouponsApi<'_> {
    /// Validate a coupon against a cart subtotal.
    pub async fn validate(
        &self,
        code: &CouponCode,
        subtotal: Money,
    ) -> Result<CouponValidation, ApiError> {
        self.client
            .post("/coupons/validate")
            .public()
            .json(&CouponValidateRequest {
                code: code.clone(),
                subtotal,
            })?
            .fetch()
            .await
    }

    /// Create a coupon (admin).
    pub async fn create(&self, coupon: &CouponPayload) -> Result<Coupon, ApiError> {
        self.client.post("/coupons/").json(coupon)?.fetch().await
    }

    /// List coupons (admin).
    pub async fn list(&self, active_only: bool) -> Result<Vec<Coupon>, ApiError> {
        let mut query = QueryString::new();
        if active_only {
            query.push("active_only", true);
        }
        let endpoint = format!("/coupons/{}", query.render());
        self.client.get(&endpoint).fetch().await
    }

    /// Update a coupon (admin).
    pub async fn update(
        &self,
        code: &CouponCode,
        update: &CouponUpdate,
    ) -> Result<Coupon, ApiError> {
        let endpoint = format!("/coupons/{code}");
        self.client.patch(&endpoint).json(update)?.fetch().await
    }

    /// Delete a coupon (admin).
    pub async fn delete(&self, code: &CouponCode) -> Result<(), ApiError> {
        let endpoint = format!("/coupons/{code}");
        self.client.delete(&endpoint).execute().await
    }

    /// Deactivate a coupon without deleting it (admin).
    pub async fn deactivate(&self, code: &CouponCode) -> Result<Coupon, ApiError> {
        let endpoint = format!("/coupons/{code}/deactivate");
        self.client.post(&endpoint).fetch().await
    }
}
