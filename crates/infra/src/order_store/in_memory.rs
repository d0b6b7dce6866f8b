use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock};

use pancakelab_core::OrderId;
use pancakelab_orders::{Order, OrderResult, OrderState};

use super::r#trait::{OrderStore, OrderStoreError};

/// In-memory order store.
///
/// Intended for tests/dev. Order handles are copied out of the map before
/// any order is queried, so the store lock is never held while an order's
/// own lock is taken.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Arc<Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, OrderStoreError> {
        Ok(self.handles()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, OrderStoreError> {
        Ok(self.len()? == 0)
    }

    fn handles(&self) -> Result<Vec<Arc<Order>>, OrderStoreError> {
        let orders = self.orders.read().map_err(|_| OrderStoreError::Poisoned)?;
        Ok(orders.values().cloned().collect())
    }
}

impl OrderStore for InMemoryOrderStore {
    fn save(&self, order: Arc<Order>) -> Result<(), OrderStoreError> {
        let order_id = order.id_typed();
        let mut orders = self.orders.write().map_err(|_| OrderStoreError::Poisoned)?;

        match orders.entry(order_id) {
            Entry::Occupied(_) => Err(OrderStoreError::DuplicateIdentifier(order_id)),
            Entry::Vacant(slot) => {
                slot.insert(order);
                tracing::debug!(%order_id, "order saved");
                Ok(())
            }
        }
    }

    fn find_by_id(&self, order_id: OrderId) -> Result<Option<Arc<Order>>, OrderStoreError> {
        let orders = self.orders.read().map_err(|_| OrderStoreError::Poisoned)?;
        Ok(orders.get(&order_id).cloned())
    }

    fn remove(&self, order: &Order) -> Result<(), OrderStoreError> {
        let order_id = order.id_typed();
        let mut orders = self.orders.write().map_err(|_| OrderStoreError::Poisoned)?;
        if orders.remove(&order_id).is_some() {
            tracing::debug!(%order_id, "order removed");
        }
        Ok(())
    }

    fn list_by_state(&self, state: OrderState) -> Result<Vec<Arc<Order>>, OrderStoreError> {
        select_in_state(self.handles()?, state, Order::state)
    }
}

/// Keep the orders whose current state is `state`, sorted by id. An order
/// whose state cannot be read fails the whole listing.
fn select_in_state<F>(
    handles: Vec<Arc<Order>>,
    state: OrderState,
    current: F,
) -> Result<Vec<Arc<Order>>, OrderStoreError>
where
    F: Fn(&Order) -> OrderResult<OrderState>,
{
    let mut matching = Vec::new();
    for order in handles {
        let order_state = current(&order).map_err(|err| {
            tracing::error!(order_id = %order.id_typed(), error = %err, "cannot read order state");
            OrderStoreError::Poisoned
        })?;
        if order_state == state {
            matching.push(order);
        }
    }
    matching.sort_by_key(|order| order.id_typed());
    Ok(matching)
}
