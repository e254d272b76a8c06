//! Product and variant types.
//!
//! These mirror the JSON the catalog API serves, not an internal product
//! model: prices are decimal numbers on the wire, image fields come in
//! several historical flavors, and variants are optional.

use crate::ids::{ProductId, VariantSku};
use crate::money::{serde_decimal, serde_decimal_opt, Money};
use serde::{Deserialize, Serialize};

/// A product as served by the catalog endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    #[serde(alias = "_id")]
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price.
    #[serde(with = "serde_decimal")]
    pub price: Money,
    /// Units in stock. Absent means the API does not track stock for
    /// this product.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Primary image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Generic image field used by older listings.
    #[serde(default)]
    pub image: Option<String>,
    /// Image gallery.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category name, if the product is categorized.
    #[serde(default)]
    pub category: Option<String>,
    /// Variants (e.g., size/color combinations), when the product has any.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Resolve the display image: primary image, then the generic image
    /// field, then the first gallery entry.
    pub fn display_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .or(self.image.as_deref())
            .or_else(|| self.images.first().map(String::as_str))
    }

    /// Check if this product carries variants.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Find a variant by SKU.
    pub fn variant(&self, sku: &VariantSku) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.sku == sku)
    }
}

/// A product variant (e.g., a size/color combination).
///
/// Variant fields override the product-level ones where present; an
/// absent price or stock falls back to the product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Stock keeping unit for this variant (unique).
    pub sku: VariantSku,
    /// Variant name (e.g., "38 / Black").
    #[serde(default)]
    pub name: Option<String>,
    /// Price override.
    #[serde(default, with = "serde_decimal_opt")]
    pub price: Option<Money>,
    /// Units in stock for this variant.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Variant-specific image.
    #[serde(default)]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_product_wire_shape() {
        let product = sample_product(
            r#"{"_id": "prod-1", "name": "Sandalia Flora", "price": 24.99, "stock": 12}"#,
        );
        assert_eq!(product.id.as_str(), "prod-1");
        assert_eq!(product.price, Money::new(2499, Currency::USD));
        assert_eq!(product.stock, Some(12));
        assert!(!product.has_variants());
    }

    #[test]
    fn test_display_image_priority() {
        let product = sample_product(
            r#"{"id": "p", "name": "x", "price": 1.0,
                "image_url": "primary.jpg", "image": "generic.jpg",
                "images": ["gallery.jpg"]}"#,
        );
        assert_eq!(product.display_image(), Some("primary.jpg"));

        let product = sample_product(
            r#"{"id": "p", "name": "x", "price": 1.0,
                "image": "generic.jpg", "images": ["gallery.jpg"]}"#,
        );
        assert_eq!(product.display_image(), Some("generic.jpg"));

        let product =
            sample_product(r#"{"id": "p", "name": "x", "price": 1.0, "images": ["gallery.jpg"]}"#);
        assert_eq!(product.display_image(), Some("gallery.jpg"));

        let product = sample_product(r#"{"id": "p", "name": "x", "price": 1.0}"#);
        assert_eq!(product.display_image(), None);
    }

    #[test]
    fn test_variant_lookup() {
        let product = sample_product(
            r#"{"id": "p", "name": "x", "price": 10.0, "stock": 5,
                "variants": [
                    {"sku": "SKU-38", "stock": 2, "image": "v38.jpg"},
                    {"sku": "SKU-39", "price": 12.5}
                ]}"#,
        );
        assert!(product.has_variants());

        let v38 = product.variant(&VariantSku::new("SKU-38")).unwrap();
        assert_eq!(v38.stock, Some(2));
        assert!(v38.price.is_none());

        let v39 = product.variant(&VariantSku::new("SKU-39")).unwrap();
        assert_eq!(v39.price, Some(Money::new(1250, Currency::USD)));

        assert!(product.variant(&VariantSku::new("SKU-40")).is_none());
    }
}
