//! Order types.

use crate::ids::{OrderId, ProductId, UserId, VariantSku};
use crate::money::{serde_decimal, Money};
use serde::{Deserialize, Serialize};

/// Order status, as the API spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, payment pending.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Payment failed.
    Failed,
    /// Order shipped.
    Shipped,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Failed => "FAILED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    /// Check if the order can still be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Paid)
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Shipped | OrderStatus::Cancelled | OrderStatus::Failed
        )
    }
}

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    pub country: String,
}

/// One item of a placed order, as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    #[serde(with = "serde_decimal")]
    pub price: Money,
}

impl OrderItem {
    /// Item subtotal (price times quantity).
    pub fn subtotal(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(alias = "_id")]
    pub id: OrderId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub status: OrderStatus,
    #[serde(with = "serde_decimal")]
    pub total_amount: Money,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One cart line in the order-creation payload.
///
/// `variant_sku` is serialized as an explicit `null` when the line has no
/// variant; the API distinguishes "no variant" from a missing field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItemPayload {
    pub product_id: ProductId,
    pub quantity: i64,
    pub variant_sku: Option<VariantSku>,
}

/// The order-creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCreate {
    pub items: Vec<OrderItemPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

/// Status-update request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

/// Shipping-update request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

/// Aggregate order statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderStats {
    pub total_orders: i64,
    #[serde(with = "serde_decimal")]
    pub total_revenue: Money,
}
