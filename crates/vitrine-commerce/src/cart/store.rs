//! The in-memory cart store.

use crate::cart::ProductSelection;
use crate::checkout::OrderItemPayload;
use crate::error::CartError;
use crate::ids::{LineId, ProductId, VariantSku};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Line identifier (product, or product + variant SKU).
    pub id: LineId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Variant SKU, when a variant was chosen.
    pub variant_sku: Option<VariantSku>,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity. Always at least 1 and never above the ceiling.
    pub quantity: i64,
    /// Maximum quantity for this line; None means unlimited.
    pub stock_ceiling: Option<i64>,
    /// Resolved display image.
    pub image: Option<String>,
}

impl CartLine {
    /// Line total (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// The shopping cart: an ordered list of line items keyed by
/// product/variant, with a stock ceiling enforced per line.
///
/// Purely local state. Every operation runs synchronously to completion;
/// failed operations return a [`CartError`] and leave the cart untouched.
/// Totals are recomputed from the lines on every call, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in display (insertion) order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by ID.
    pub fn get(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Add a selection to the cart.
    ///
    /// If a line for the same product/variant already exists, its quantity
    /// grows by `quantity`; otherwise a new line is appended. Fails without
    /// touching the cart when the resulting quantity would exceed the
    /// selection's stock ceiling.
    pub fn add(&mut self, selection: &ProductSelection, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let id = selection.line_id();
        let ceiling = selection.stock_ceiling();
        let current = self.get(&id).map(|l| l.quantity).unwrap_or(0);
        let new_quantity = current.saturating_add(quantity);

        if let Some(available) = ceiling {
            if new_quantity > available {
                return Err(CartError::InsufficientStock {
                    requested: new_quantity,
                    available,
                });
            }
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == id) {
            existing.quantity = new_quantity;
        } else {
            self.lines.push(CartLine {
                id,
                product_id: selection.product_id.clone(),
                variant_sku: selection.variant_sku().cloned(),
                name: selection.name.clone(),
                unit_price: selection.resolved_price(),
                quantity,
                stock_ceiling: ceiling,
                image: selection.display_image(),
            });
        }
        Ok(())
    }

    /// Remove a line. Removing an absent line is a no-op.
    pub fn remove(&mut self, id: &LineId) {
        self.lines.retain(|l| &l.id != id);
    }

    /// Set a line's quantity.
    ///
    /// Fails when the quantity is below 1, the line is absent, or the
    /// quantity exceeds the line's ceiling.
    pub fn update_quantity(&mut self, id: &LineId, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        let line = self
            .lines
            .iter_mut()
            .find(|l| &l.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.as_str().to_string()))?;

        if let Some(available) = line.stock_ceiling {
            if quantity > available {
                return Err(CartError::InsufficientStock {
                    requested: quantity,
                    available,
                });
            }
        }

        line.quantity = quantity;
        Ok(())
    }

    /// Grow a line's quantity by one.
    pub fn increment(&mut self, id: &LineId) -> Result<(), CartError> {
        let current = self
            .get(id)
            .map(|l| l.quantity)
            .ok_or_else(|| CartError::LineNotFound(id.as_str().to_string()))?;
        self.update_quantity(id, current + 1)
    }

    /// Shrink a line's quantity by one. At quantity 1 the line is removed
    /// instead.
    pub fn decrement(&mut self, id: &LineId) -> Result<(), CartError> {
        let current = self
            .get(id)
            .map(|l| l.quantity)
            .ok_or_else(|| CartError::LineNotFound(id.as_str().to_string()))?;

        if current <= 1 {
            self.remove(id);
            return Ok(());
        }
        self.update_quantity(id, current - 1)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total price over all lines.
    pub fn total(&self) -> Money {
        let totals: Vec<Money> = self.lines.iter().map(CartLine::line_total).collect();
        Money::sum(totals.iter(), Currency::default())
    }

    /// Total quantity over all lines.
    pub fn count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// The order-creation payload for the current cart, in cart order.
    pub fn to_order_payload(&self) -> Vec<OrderItemPayload> {
        self.lines
            .iter()
            .map(|l| OrderItemPayload {
                product_id: l.product_id.clone(),
                quantity: l.quantity,
                variant_sku: l.variant_sku.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    fn selection(json: &str) -> ProductSelection {
        ProductSelection::from_product(&product(json))
    }

    fn simple(id: &str, price: f64, stock: Option<i64>) -> ProductSelection {
        let stock = match stock {
            Some(s) => format!(", \"stock\": {s}"),
            None => String::new(),
        };
        selection(&format!(
            r#"{{"id": "{id}", "name": "item {id}", "price": {price}{stock}}}"#
        ))
    }

    #[test]
    fn test_add_new_line() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, Some(5)), 2).unwrap();

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Money::new(2000, Currency::USD));
    }

    #[test]
    fn test_add_same_line_grows_quantity() {
        let mut cart = CartStore::new();
        let sel = simple("p1", 10.0, Some(5));
        cart.add(&sel, 1).unwrap();
        cart.add(&sel, 2).unwrap();

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_rejects_over_ceiling_and_leaves_cart_unchanged() {
        let mut cart = CartStore::new();
        let sel = simple("p1", 10.0, Some(3));
        cart.add(&sel, 2).unwrap();

        let err = cart.add(&sel, 2).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                requested: 4,
                available: 3
            }
        );
        // No partial mutation
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total(), Money::new(2000, Currency::USD));
    }

    #[test]
    fn test_add_succeeds_exactly_at_ceiling() {
        let mut cart = CartStore::new();
        let sel = simple("p1", 10.0, Some(3));
        cart.add(&sel, 1).unwrap();
        cart.add(&sel, 2).unwrap();
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_add_without_ceiling_is_unlimited() {
        let mut cart = CartStore::new();
        let sel = simple("p1", 10.0, None);
        cart.add(&sel, 500).unwrap();
        assert_eq!(cart.count(), 500);
    }

    #[test]
    fn test_add_rejects_quantity_below_one() {
        let mut cart = CartStore::new();
        let err = cart.add(&simple("p1", 10.0, None), 0).unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_variant_and_product_are_distinct_lines() {
        let mut cart = CartStore::new();
        let p = product(
            r#"{"id": "p1", "name": "x", "price": 10.0, "stock": 9,
                "variants": [{"sku": "S-38", "stock": 4}]}"#,
        );
        cart.add(&ProductSelection::from_product(&p), 1).unwrap();
        cart.add(&ProductSelection::with_variant(&p, &p.variants[0]), 1)
            .unwrap();

        assert_eq!(cart.unique_line_count(), 2);
        assert_eq!(cart.lines()[1].variant_sku, Some(VariantSku::new("S-38")));
        assert_eq!(cart.lines()[1].stock_ceiling, Some(4));
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, None), 1).unwrap();
        cart.remove(&LineId::new("missing"));
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, Some(5)), 1).unwrap();
        cart.update_quantity(&LineId::new("p1"), 4).unwrap();
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_update_rejections() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, Some(5)), 2).unwrap();
        let id = LineId::new("p1");

        assert_eq!(
            cart.update_quantity(&id, 0),
            Err(CartError::InvalidQuantity(0))
        );
        assert_eq!(
            cart.update_quantity(&LineId::new("missing"), 2),
            Err(CartError::LineNotFound("missing".to_string()))
        );
        assert_eq!(
            cart.update_quantity(&id, 6),
            Err(CartError::InsufficientStock {
                requested: 6,
                available: 5
            })
        );
        // Rejections leave the quantity alone
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_increment_respects_ceiling() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, Some(2)), 2).unwrap();
        let id = LineId::new("p1");

        assert!(cart.increment(&id).is_err());
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_decrement_above_one() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, None), 3).unwrap();
        let id = LineId::new("p1");

        cart.decrement(&id).unwrap();
        assert_eq!(cart.get(&id).unwrap().quantity, 2);
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_decrement_at_one_removes_line() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, None), 1).unwrap();
        let id = LineId::new("p1");

        cart.decrement(&id).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_missing_line() {
        let mut cart = CartStore::new();
        assert_eq!(
            cart.decrement(&LineId::new("missing")),
            Err(CartError::LineNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, None), 2).unwrap();
        cart.add(&simple("p2", 5.0, None), 1).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_totals_track_operation_sequences() {
        let mut cart = CartStore::new();
        cart.add(&simple("p1", 10.0, Some(10)), 2).unwrap();
        cart.add(&simple("p2", 7.5, None), 1).unwrap();
        assert_eq!(cart.total(), Money::new(2750, Currency::USD));
        assert_eq!(cart.count(), 3);

        cart.update_quantity(&LineId::new("p2"), 4).unwrap();
        assert_eq!(cart.total(), Money::new(5000, Currency::USD));
        assert_eq!(cart.count(), 6);

        cart.remove(&LineId::new("p1"));
        assert_eq!(cart.total(), Money::new(3000, Currency::USD));
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_order_payload_preserves_order_and_nulls_missing_sku() {
        let mut cart = CartStore::new();
        let p = product(
            r#"{"id": "p1", "name": "x", "price": 10.0,
                "variants": [{"sku": "S-38"}]}"#,
        );
        cart.add(&ProductSelection::with_variant(&p, &p.variants[0]), 2)
            .unwrap();
        cart.add(&simple("p2", 5.0, None), 1).unwrap();

        let payload = cart.to_order_payload();
        assert_eq!(payload.len(), cart.unique_line_count());
        assert_eq!(payload[0].product_id.as_str(), "p1");
        assert_eq!(payload[0].variant_sku, Some(VariantSku::new("S-38")));
        assert_eq!(payload[1].product_id.as_str(), "p2");
        assert_eq!(payload[1].variant_sku, None);

        let json = serde_json::to_string(&payload[1]).unwrap();
        assert_eq!(
            json,
            r#"{"product_id":"p2","quantity":1,"variant_sku":null}"#
        );
    }
}
