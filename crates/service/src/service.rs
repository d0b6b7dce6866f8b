use std::collections::BTreeMap;
use std::sync::Arc;

use pancakelab_core::OrderId;
use pancakelab_infra::{InMemoryOrderStore, OrderStore};
use pancakelab_orders::{Order, OrderState};
use pancakelab_pancakes::{Ingredient, Pancake, PancakeMenu};

use crate::error::{ServiceError, ServiceResult};

/// Entry point for ordering, preparing and delivering pancakes.
///
/// Holds no order locks itself: every call looks the order up in the store
/// and then delegates to exactly one order operation. Cancelled and
/// delivered orders are dropped from the store once the transition
/// succeeds.
#[derive(Debug)]
pub struct PancakeService<S> {
    store: S,
    menu: PancakeMenu,
}

impl PancakeService<InMemoryOrderStore> {
    /// Service backed by an empty in-memory store and the house menu.
    pub fn in_memory() -> Self {
        Self::new(InMemoryOrderStore::new(), PancakeMenu::new())
    }
}

impl<S> PancakeService<S>
where
    S: OrderStore,
{
    pub fn new(store: S, menu: PancakeMenu) -> Self {
        Self { store, menu }
    }

    pub fn menu(&self) -> &PancakeMenu {
        &self.menu
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create and store a new order for the given building and room.
    pub fn create_order(&self, building: i64, room: i64) -> ServiceResult<Arc<Order>> {
        let order = Arc::new(Order::new(building, room)?);
        self.store.save(order.clone())?;
        Ok(order)
    }

    pub fn order(&self, order_id: OrderId) -> ServiceResult<Arc<Order>> {
        self.store
            .find_by_id(order_id)?
            .ok_or(ServiceError::OrderNotFound(order_id))
    }

    /// Add `count` pancakes picked from the menu by label.
    pub fn add_pancakes(&self, order_id: OrderId, label: &str, count: i64) -> ServiceResult<()> {
        let pancake = self
            .menu
            .find_by_label(label)
            .ok_or_else(|| ServiceError::NoSuchPancake(label.to_string()))?;
        self.order(order_id)?.add_item(&pancake, count)?;
        Ok(())
    }

    /// Add `count` pancakes made from any combination of ingredients.
    pub fn add_custom_pancakes(
        &self,
        order_id: OrderId,
        ingredients: &[Ingredient],
        count: i64,
    ) -> ServiceResult<()> {
        let pancake = Pancake::new(ingredients.iter().copied());
        self.order(order_id)?.add_item(&pancake, count)?;
        Ok(())
    }

    /// Like [`add_custom_pancakes`](Self::add_custom_pancakes), with ingredients
    /// given by display name (`"whipped cream"`). An unknown name adds nothing.
    pub fn add_custom_pancakes_by_name<N: AsRef<str>>(
        &self,
        order_id: OrderId,
        ingredient_names: &[N],
        count: i64,
    ) -> ServiceResult<()> {
        let pancake = Pancake::from_names(ingredient_names)?;
        self.order(order_id)?.add_item(&pancake, count)?;
        Ok(())
    }

    /// Remove up to `count` pancakes with the given label.
    ///
    /// The label is matched against what the order holds, so custom pancakes
    /// can be removed too. A label the order does not contain is ignored.
    pub fn remove_pancakes(&self, order_id: OrderId, label: &str, count: i64) -> ServiceResult<()> {
        let order = self.order(order_id)?;
        let found = order
            .contents()?
            .into_keys()
            .find(|pancake| pancake.label() == label);

        match found {
            Some(pancake) => order.remove_item(&pancake, count)?,
            None => tracing::warn!(%order_id, label, "no pancake with this label in order"),
        }
        Ok(())
    }

    pub fn cancel_order(&self, order_id: OrderId) -> ServiceResult<()> {
        self.cancel(&*self.order(order_id)?)
    }

    /// Cancel through a handle the caller already holds.
    ///
    /// Safe to retry: once cancelled the order is gone from the store, but
    /// cancelling the same handle again is still a no-op success.
    pub fn cancel(&self, order: &Order) -> ServiceResult<()> {
        let state = order.mark_cancelled()?;
        self.retire_if_terminal(order, state)
    }

    pub fn complete_order(&self, order_id: OrderId) -> ServiceResult<()> {
        self.order(order_id)?.mark_completed()?;
        Ok(())
    }

    pub fn prepare_order(&self, order_id: OrderId) -> ServiceResult<()> {
        self.order(order_id)?.mark_prepared()?;
        Ok(())
    }

    pub fn deliver_order(&self, order_id: OrderId) -> ServiceResult<()> {
        self.deliver(&*self.order(order_id)?)
    }

    /// Deliver through a handle the caller already holds. Safe to retry.
    pub fn deliver(&self, order: &Order) -> ServiceResult<()> {
        let state = order.mark_delivered()?;
        self.retire_if_terminal(order, state)
    }

    fn retire_if_terminal(&self, order: &Order, state: OrderState) -> ServiceResult<()> {
        if state.is_terminal() {
            self.store.remove(order)?;
        }
        Ok(())
    }

    /// Orders waiting in the kitchen.
    pub fn completed_orders(&self) -> ServiceResult<Vec<Arc<Order>>> {
        Ok(self.store.list_by_state(OrderState::Completed)?)
    }

    /// Orders ready for delivery.
    pub fn prepared_orders(&self) -> ServiceResult<Vec<Arc<Order>>> {
        Ok(self.store.list_by_state(OrderState::Prepared)?)
    }

    /// Pancake label → count.
    pub fn view_order(&self, order_id: OrderId) -> ServiceResult<BTreeMap<String, i64>> {
        let contents = self.order(order_id)?.contents()?;
        Ok(contents
            .into_iter()
            .map(|(pancake, count)| (pancake.label().to_string(), count))
            .collect())
    }
}
