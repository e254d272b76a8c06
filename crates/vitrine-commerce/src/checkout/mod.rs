//! Order shapes consumed and produced by the order endpoints.

mod order;

pub use order::{
    Address, Order, OrderCreate, OrderItem, OrderItemPayload, OrderStats, OrderStatus,
    OrderStatusUpdate, ShippingUpdate,
};
