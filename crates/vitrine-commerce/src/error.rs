//! Cart error types.

use thiserror::Error;

/// Errors returned by cart operations.
///
/// These are business outcomes, not faults: the UI is expected to inspect
/// them and surface a message. No cart operation panics, and a failed
/// operation leaves the cart exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Quantity must be at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// No line with the given identifier is in the cart.
    #[error("Item not in cart: {0}")]
    LineNotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },
}
