//! Shopping cart: line items, the cart store, and its operations.

mod selection;
mod store;

pub use selection::{ProductSelection, VariantSelection};
pub use store::{CartLine, CartStore};
