//! E-commerce domain types and cart logic for Vitrine.
//!
//! This crate is the pure half of the storefront data layer: typed IDs,
//! money, catalog shapes as the API serves them, the in-memory shopping
//! cart, and the order payload shapes consumed by checkout. No I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_commerce::prelude::*;
//!
//! let mut cart = CartStore::new();
//! let selection = ProductSelection::from_product(&product);
//! cart.add(&selection, 1)?;
//!
//! println!("Total: {}", cart.total().display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CartError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, ProductVariant};

    // Cart
    pub use crate::cart::{CartLine, CartStore, ProductSelection, VariantSelection};

    // Checkout
    pub use crate::checkout::{
        Address, Order, OrderCreate, OrderItem, OrderItemPayload, OrderStats, OrderStatus,
        OrderStatusUpdate, ShippingUpdate,
    };
}
