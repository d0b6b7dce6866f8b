//! Infrastructure layer: storage adapters for orders.

pub mod order_store;

pub use order_store::{InMemoryOrderStore, OrderStore, OrderStoreError};
