//! What the UI hands to the cart: a product, optionally narrowed to a
//! chosen variant.

use crate::catalog::{Product, ProductVariant};
use crate::ids::{LineId, ProductId, VariantSku};
use crate::money::Money;

/// The variant half of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantSelection {
    /// Variant SKU.
    pub sku: VariantSku,
    /// Price override, when the variant prices differently.
    pub unit_price: Option<Money>,
    /// Variant stock, when tracked.
    pub stock: Option<i64>,
    /// Variant-specific image.
    pub image: Option<String>,
}

/// A product chosen for the cart, with an optional variant.
///
/// Carries everything the cart needs to mint a line: identity, the
/// resolved price, the applicable stock ceiling, and the display image
/// candidates in priority order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    /// Product identifier.
    pub product_id: ProductId,
    /// Product name, denormalized for display.
    pub name: String,
    /// Product-level unit price.
    pub unit_price: Money,
    /// Product-level stock, when tracked.
    pub stock: Option<i64>,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Generic image field.
    pub image: Option<String>,
    /// Image gallery.
    pub images: Vec<String>,
    /// Chosen variant, if any.
    pub variant: Option<VariantSelection>,
}

impl ProductSelection {
    /// Select a product without a variant.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            stock: product.stock,
            image_url: product.image_url.clone(),
            image: product.image.clone(),
            images: product.images.clone(),
            variant: None,
        }
    }

    /// Select a specific variant of a product.
    pub fn with_variant(product: &Product, variant: &ProductVariant) -> Self {
        let mut selection = Self::from_product(product);
        selection.variant = Some(VariantSelection {
            sku: variant.sku.clone(),
            unit_price: variant.price,
            stock: variant.stock,
            image: variant.image.clone(),
        });
        selection
    }

    /// The cart line this selection maps to.
    pub fn line_id(&self) -> LineId {
        LineId::compose(&self.product_id, self.variant.as_ref().map(|v| &v.sku))
    }

    /// The SKU of the chosen variant, if any.
    pub fn variant_sku(&self) -> Option<&VariantSku> {
        self.variant.as_ref().map(|v| &v.sku)
    }

    /// Unit price, preferring the variant override.
    pub fn resolved_price(&self) -> Money {
        self.variant
            .as_ref()
            .and_then(|v| v.unit_price)
            .unwrap_or(self.unit_price)
    }

    /// Applicable stock ceiling: variant stock takes precedence over
    /// product stock; neither means unlimited.
    pub fn stock_ceiling(&self) -> Option<i64> {
        match &self.variant {
            Some(variant) => variant.stock.or(self.stock),
            None => self.stock,
        }
    }

    /// Display image, by priority: variant image, primary image, generic
    /// image field, first gallery entry.
    pub fn display_image(&self) -> Option<String> {
        self.variant
            .as_ref()
            .and_then(|v| v.image.clone())
            .or_else(|| self.image_url.clone())
            .or_else(|| self.image.clone())
            .or_else(|| self.images.first().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product_with_variant() -> Product {
        serde_json::from_str(
            r#"{"id": "prod-1", "name": "Sandalia Flora", "price": 24.99, "stock": 10,
                "image_url": "flora.jpg",
                "variants": [{"sku": "FLORA-38", "price": 27.5, "stock": 3, "image": "flora-38.jpg"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_selection_without_variant() {
        let product = product_with_variant();
        let selection = ProductSelection::from_product(&product);

        assert_eq!(selection.line_id().as_str(), "prod-1");
        assert_eq!(selection.resolved_price(), Money::new(2499, Currency::USD));
        assert_eq!(selection.stock_ceiling(), Some(10));
        assert_eq!(selection.display_image().as_deref(), Some("flora.jpg"));
    }

    #[test]
    fn test_selection_with_variant_overrides() {
        let product = product_with_variant();
        let variant = product.variants[0].clone();
        let selection = ProductSelection::with_variant(&product, &variant);

        assert_eq!(selection.line_id().as_str(), "prod-1FLORA-38");
        assert_eq!(selection.resolved_price(), Money::new(2750, Currency::USD));
        assert_eq!(selection.stock_ceiling(), Some(3));
        assert_eq!(selection.display_image().as_deref(), Some("flora-38.jpg"));
    }

    #[test]
    fn test_variant_falls_back_to_product_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": "p", "name": "x", "price": 5.0, "stock": 8, "image": "x.jpg",
                "variants": [{"sku": "X-S"}]}"#,
        )
        .unwrap();
        let selection = ProductSelection::with_variant(&product, &product.variants[0]);

        assert_eq!(selection.resolved_price(), Money::new(500, Currency::USD));
        assert_eq!(selection.stock_ceiling(), Some(8));
        assert_eq!(selection.display_image().as_deref(), Some("x.jpg"));
    }

    #[test]
    fn test_untracked_stock_means_unlimited() {
        let product: Product =
            serde_json::from_str(r#"{"id": "p", "name": "x", "price": 5.0}"#).unwrap();
        let selection = ProductSelection::from_product(&product);
        assert_eq!(selection.stock_ceiling(), None);
    }
}
