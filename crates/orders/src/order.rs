use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use pancakelab_core::{AggregateRoot, Entity, OrderId};
use pancakelab_pancakes::Pancake;

use crate::address::Address;
use crate::error::{OrderError, OrderResult};
use crate::ledger::{Ledger, Removal};
use crate::state::{OrderOperation, OrderState, Transition};

/// Mutable part of an order, guarded by the order's lock.
#[derive(Debug)]
struct OrderInner {
    ledger: Ledger,
    state: OrderState,
    version: u64,
}

/// Aggregate root: a pancake order.
///
/// Identity, address and creation time never change and are read without
/// locking. Contents, state and version sit behind one read/write lock:
/// every mutation (including no-op transitions) takes the write side, while
/// `state`, `contents`, `version` and `view` take the read side. Each call
/// locks exactly this order, so operations on different orders never
/// contend.
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    address: Address,
    created_at: DateTime<Utc>,
    inner: RwLock<OrderInner>,
}

/// One line of an order view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub label: String,
    pub count: i64,
}

/// Consistent, serializable picture of an order taken under a single read lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: OrderId,
    pub address: Address,
    pub state: OrderState,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    /// Lines in the order the pancakes were first added.
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Create a new, empty order in the `New` state.
    pub fn create(address: Address) -> Self {
        let order = Self {
            id: OrderId::new(),
            address,
            created_at: Utc::now(),
            inner: RwLock::new(OrderInner {
                ledger: Ledger::new(),
                state: OrderState::New,
                version: 0,
            }),
        };
        tracing::info!(order_id = %order.id, %address, "order created");
        order
    }

    /// Validate the address and create a new order.
    pub fn new(building: i64, room: i64) -> OrderResult<Self> {
        Ok(Self::create(Address::new(building, room)?))
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Add `count` pancakes. Only allowed while the order is new.
    pub fn add_item(&self, pancake: &Pancake, count: i64) -> OrderResult<()> {
        let total = {
            let mut inner = self.write()?;
            let OrderInner {
                ledger,
                state,
                version,
            } = &mut *inner;
            let total = state.add_item(ledger, pancake, count)?;
            *version += 1;
            total
        };

        tracing::info!(
            order_id = %self.id,
            label = pancake.label(),
            count,
            total,
            "pancakes added to order"
        );
        Ok(())
    }

    /// Remove up to `count` pancakes. Only allowed while the order is new.
    ///
    /// Removing more than the order holds drops the line entirely; removing
    /// a pancake the order does not contain changes nothing.
    pub fn remove_item(&self, pancake: &Pancake, count: i64) -> OrderResult<()> {
        let removal = {
            let mut inner = self.write()?;
            let OrderInner {
                ledger,
                state,
                version,
            } = &mut *inner;
            let removal = state.remove_item(ledger, pancake, count)?;
            if removal != Removal::Absent {
                *version += 1;
            }
            removal
        };

        match removal {
            Removal::Absent => tracing::warn!(
                order_id = %self.id,
                label = pancake.label(),
                "pancake to remove not found in order"
            ),
            Removal::Decremented(remaining) => tracing::info!(
                order_id = %self.id,
                label = pancake.label(),
                count,
                remaining,
                "pancakes removed from order"
            ),
            Removal::Removed => tracing::info!(
                order_id = %self.id,
                label = pancake.label(),
                count,
                remaining = 0,
                "pancakes removed from order"
            ),
        }
        Ok(())
    }

    pub fn mark_cancelled(&self) -> OrderResult<OrderState> {
        self.transition(OrderOperation::Cancel, |state, _| state.mark_cancelled())
    }

    /// Fails with `EmptyOrder` when the order has no pancakes.
    pub fn mark_completed(&self) -> OrderResult<OrderState> {
        self.transition(OrderOperation::Complete, |state, ledger| {
            state.mark_completed(ledger)
        })
    }

    pub fn mark_prepared(&self) -> OrderResult<OrderState> {
        self.transition(OrderOperation::Prepare, |state, _| state.mark_prepared())
    }

    pub fn mark_delivered(&self) -> OrderResult<OrderState> {
        self.transition(OrderOperation::Deliver, |state, _| state.mark_delivered())
    }

    pub fn state(&self) -> OrderResult<OrderState> {
        Ok(self.read()?.state)
    }

    /// Snapshot of pancake → count. Later mutations do not show through it.
    pub fn contents(&self) -> OrderResult<BTreeMap<Pancake, i64>> {
        Ok(self.read()?.ledger.snapshot())
    }

    pub fn version(&self) -> OrderResult<u64> {
        Ok(self.read()?.version)
    }

    pub fn view(&self) -> OrderResult<OrderView> {
        let inner = self.read()?;
        Ok(OrderView {
            id: self.id,
            address: self.address,
            state: inner.state,
            version: inner.version,
            created_at: self.created_at,
            lines: inner
                .ledger
                .iter()
                .map(|(pancake, count)| OrderLine {
                    label: pancake.label().to_string(),
                    count,
                })
                .collect(),
        })
    }

    /// Run a state transition under the write lock and return the resulting state.
    fn transition<F>(&self, operation: OrderOperation, decide: F) -> OrderResult<OrderState>
    where
        F: FnOnce(OrderState, &Ledger) -> OrderResult<Transition>,
    {
        let (from, outcome) = {
            let mut inner = self.write()?;
            let from = inner.state;
            let outcome = decide(from, &inner.ledger)?;
            if let Transition::Moved(next) = outcome {
                inner.state = next;
                inner.version += 1;
            }
            (from, outcome)
        };

        match outcome {
            Transition::Moved(to) => {
                tracing::info!(order_id = %self.id, %operation, %from, %to, "order state changed");
                Ok(to)
            }
            Transition::Unchanged => {
                tracing::debug!(order_id = %self.id, %operation, state = %from, "transition already applied");
                Ok(from)
            }
        }
    }

    fn read(&self) -> OrderResult<RwLockReadGuard<'_, OrderInner>> {
        self.inner.read().map_err(|_| OrderError::LockPoisoned)
    }

    fn write(&self) -> OrderResult<RwLockWriteGuard<'_, OrderInner>> {
        self.inner.write().map_err(|_| OrderError::LockPoisoned)
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl core::hash::Hash for Order {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Order {
    /// Returns 0 if the lock is poisoned.
    fn version(&self) -> u64 {
        Order::version(self).unwrap_or_default()
    }
}
