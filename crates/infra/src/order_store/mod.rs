//! Order store boundary.
//!
//! Keyed access to live orders with identifier uniqueness. The store hands
//! out shared `Arc<Order>` handles; it never reaches into an order's
//! contents or state beyond the read-only queries used for filtering.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryOrderStore;
pub use r#trait::{OrderStore, OrderStoreError};
