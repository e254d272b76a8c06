//! Order endpoints.

use crate::api::{ApiClient, QueryString};
use crate::ApiError;
use serde::Deserialize;
use vitrine_commerce::checkout::{
    Order, OrderCreate, OrderStats, OrderStatus, OrderStatusUpdate, ShippingUpdate,
};
use vitrine_commerce::ids::OrderId;

/// Query parameters for order listings.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    pub status: Option<OrderStatus>,
}

impl OrderQuery {
    fn render(&self) -> String {
        let mut query = QueryString::new();
        query.push_opt("limit", self.limit);
        query.push_opt("skip", self.skip);
        query.push_opt("status", self.status.map(|s| s.as_str()));
        query.render()
    }
}

/// The checkout payment link.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub payment_url: String,
}

/// Order endpoint group.
pub struct OrdersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl OrdersApi<'_> {
    /// Place an order.
    pub async fn create(&self, order: &OrderCreate) -> Result<Order, ApiError> {
        self.client.post("/orders/").json(order)?.fetch().await
    }

    /// List the current user's orders.
    pub async fn my_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError> {
        let endpoint = format!("/orders/me{}", query.render());
        self.client.get(&endpoint).fetch().await
    }

    /// List all orders (admin).
    pub async fn list(&self, query: &OrderQuery) -> Result<Vec<Order>, ApiError> {
        let endpoint = format!("/orders/{}", query.render());
        self.client.get(&endpoint).fetch().await
    }

    /// Fetch an order by ID.
    pub async fn get(&self, id: &OrderId) -> Result<Order, ApiError> {
        let endpoint = format!("/orders/{id}");
        self.client.get(&endpoint).fetch().await
    }

    /// Update an order's status (admin).
    pub async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let endpoint = format!("/orders/{id}/status");
        self.client
            .patch(&endpoint)
            .json(&OrderStatusUpdate { status })?
            .fetch()
            .await
    }

    /// Update an order's shipping details (admin).
    pub async fn update_shipping(
        &self,
        id: &OrderId,
        shipping: &ShippingUpdate,
    ) -> Result<Order, ApiError> {
        let endpoint = format!("/orders/{id}/shipping");
        self.client.patch(&endpoint).json(shipping)?.fetch().await
    }

    /// Cancel an order.
    pub async fn cancel(&self, id: &OrderId) -> Result<Order, ApiError> {
        let endpoint = format!("/orders/{id}/cancel");
        self.client.post(&endpoint).fetch().await
    }

    /// Create a payment link for an order.
    pub async fn payment_link(&self, id: &OrderId) -> Result<PaymentLink, ApiError> {
        let endpoint = format!("/orders/{id}/payment-link");
        self.client.post(&endpoint).fetch().await
    }

    /// Aggregate order statistics (admin).
    pub async fn stats(&self) -> Result<OrderStats, ApiError> {
        self.client.get("/orders/stats/summary").fetch().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_query_rendering() {
        let query = OrderQuery {
            limit: Some(20),
            status: Some(OrderStatus::Paid),
            ..Default::default()
        };
        assert_eq!(query.render(), "?limit=20&status=PAID");
    }

    #[test]
    fn test_payment_link_wire_shape() {
        let link: PaymentLink =
            serde_json::from_str(r#"{"payment_url": "https://pay.example/x"}"#).unwrap();
        assert_eq!(link.payment_url, "https://pay.example/x");
    }
}
