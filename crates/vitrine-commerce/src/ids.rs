//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where an OrderId is expected. Identifiers are
//! minted by the remote API; this client only carries them around.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(VariantSku);
define_id!(CategoryId);
define_id!(OrderId);
define_id!(ReviewId);
define_id!(CouponCode);
define_id!(UserId);
define_id!(LineId);

impl LineId {
    /// Compose the cart line identifier for a product/variant pair.
    ///
    /// A line without a variant is keyed by the product ID alone; a variant
    /// line appends the SKU so the same product can occupy several lines.
    pub fn compose(product_id: &ProductId, variant_sku: Option<&VariantSku>) -> Self {
        match variant_sku {
            Some(sku) => Self(format!("{}{}", product_id.as_str(), sku.as_str())),
            None => Self(product_id.as_str().to_string()),
        }
    }
}
