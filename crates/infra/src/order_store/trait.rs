use std::sync::Arc;

use thiserror::Error;

use pancakelab_core::OrderId;
use pancakelab_orders::{Order, OrderState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderStoreError {
    /// An order with the same identifier is already stored.
    #[error("order with id {0} already exists")]
    DuplicateIdentifier(OrderId),

    #[error("order store lock poisoned")]
    Poisoned,
}

/// Storage of live orders, keyed by identifier.
pub trait OrderStore: Send + Sync {
    /// Store a new order. Fails if its identifier is already present.
    fn save(&self, order: Arc<Order>) -> Result<(), OrderStoreError>;

    fn find_by_id(&self, order_id: OrderId) -> Result<Option<Arc<Order>>, OrderStoreError>;

    /// Forget the order. Removing an unknown order is a no-op.
    fn remove(&self, order: &Order) -> Result<(), OrderStoreError>;

    /// All stored orders currently in `state`.
    fn list_by_state(&self, state: OrderState) -> Result<Vec<Arc<Order>>, OrderStoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn save(&self, order: Arc<Order>) -> Result<(), OrderStoreError> {
        (**self).save(order)
    }

    fn find_by_id(&self, order_id: OrderId) -> Result<Option<Arc<Order>>, OrderStoreError> {
        (**self).find_by_id(order_id)
    }

    fn remove(&self, order: &Order) -> Result<(), OrderStoreError> {
        (**self).remove(order)
    }

    fn list_by_state(&self, state: OrderState) -> Result<Vec<Arc<Order>>, OrderStoreError> {
        (**self).list_by_state(state)
    }
}
