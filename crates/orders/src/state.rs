//! Order lifecycle state machine.
//!
//! ```text
//!   New ──complete──► Completed ──prepare──► Prepared ──deliver──► Delivered
//!    │                    │
//!    └──────cancel────────┴──────────────► Cancelled
//! ```
//!
//! Each transition is decided by a single `match` on the current state. The
//! state code runs inside the order's write lock and never locks anything
//! itself. Re-applying a transition that already happened (cancelling a
//! cancelled order, preparing a prepared one, ...) is a silent no-op.

use serde::{Deserialize, Serialize};

use pancakelab_pancakes::Pancake;

use crate::error::{OrderError, OrderResult};
use crate::ledger::{Ledger, Removal};

/// Lifecycle stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    New,
    Completed,
    Prepared,
    Delivered,
    Cancelled,
}

/// Operations an order can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderOperation {
    AddItem,
    RemoveItem,
    Cancel,
    Complete,
    Prepare,
    Deliver,
}

/// Result of a transition request that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    Moved(OrderState),
    Unchanged,
}

impl OrderState {
    pub const ALL: [OrderState; 5] = [
        OrderState::New,
        OrderState::Completed,
        OrderState::Prepared,
        OrderState::Delivered,
        OrderState::Cancelled,
    ];

    /// Delivered and Cancelled orders accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderState::Delivered | OrderState::Cancelled)
    }

    /// Only new orders can have their contents changed.
    pub fn is_modifiable(self) -> bool {
        matches!(self, OrderState::New)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderState::New => "new",
            OrderState::Completed => "completed",
            OrderState::Prepared => "prepared",
            OrderState::Delivered => "delivered",
            OrderState::Cancelled => "cancelled",
        }
    }

    fn reject(self, operation: OrderOperation) -> OrderError {
        OrderError::InvalidState {
            state: self,
            operation,
        }
    }

    pub(crate) fn add_item(
        self,
        ledger: &mut Ledger,
        pancake: &Pancake,
        count: i64,
    ) -> OrderResult<i64> {
        if !self.is_modifiable() {
            return Err(self.reject(OrderOperation::AddItem));
        }
        ledger.add(pancake, count)
    }

    pub(crate) fn remove_item(
        self,
        ledger: &mut Ledger,
        pancake: &Pancake,
        count: i64,
    ) -> OrderResult<Removal> {
        if !self.is_modifiable() {
            return Err(self.reject(OrderOperation::RemoveItem));
        }
        ledger.remove(pancake, count)
    }

    pub(crate) fn mark_cancelled(self) -> OrderResult<Transition> {
        match self {
            OrderState::New | OrderState::Completed => Ok(Transition::Moved(OrderState::Cancelled)),
            OrderState::Cancelled => Ok(Transition::Unchanged),
            OrderState::Prepared | OrderState::Delivered => {
                Err(self.reject(OrderOperation::Cancel))
            }
        }
    }

    pub(crate) fn mark_completed(self, ledger: &Ledger) -> OrderResult<Transition> {
        match self {
            OrderState::New if ledger.is_empty() => Err(OrderError::EmptyOrder),
            OrderState::New => Ok(Transition::Moved(OrderState::Completed)),
            OrderState::Completed => Ok(Transition::Unchanged),
            OrderState::Prepared | OrderState::Delivered | OrderState::Cancelled => {
                Err(self.reject(OrderOperation::Complete))
            }
        }
    }

    pub(crate) fn mark_prepared(self) -> OrderResult<Transition> {
        match self {
            OrderState::Completed => Ok(Transition::Moved(OrderState::Prepared)),
            OrderState::Prepared => Ok(Transition::Unchanged),
            OrderState::New | OrderState::Delivered | OrderState::Cancelled => {
                Err(self.reject(OrderOperation::Prepare))
            }
        }
    }

    pub(crate) fn mark_delivered(self) -> OrderResult<Transition> {
        match self {
            OrderState::Prepared => Ok(Transition::Moved(OrderState::Delivered)),
            OrderState::Delivered => Ok(Transition::Unchanged),
            OrderState::New | OrderState::Completed | OrderState::Cancelled => {
                Err(self.reject(OrderOperation::Deliver))
            }
        }
    }
}

impl core::fmt::Display for OrderState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::fmt::Display for OrderOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let phrase = match self {
            OrderOperation::AddItem => "add pancakes to",
            OrderOperation::RemoveItem => "remove pancakes from",
            OrderOperation::Cancel => "cancel",
            OrderOperation::Complete => "complete",
            OrderOperation::Prepare => "prepare",
            OrderOperation::Deliver => "deliver",
        };
        f.write_str(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pancakelab_pancakes::Ingredient;

    use super::OrderState::*;

    fn filled_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger
            .add(&Pancake::new([Ingredient::DarkChocolate]), 1)
            .unwrap();
        ledger
    }

    fn outcome(result: OrderResult<Transition>) -> Result<Option<OrderState>, OrderError> {
        result.map(|t| match t {
            Transition::Moved(next) => Some(next),
            Transition::Unchanged => None,
        })
    }

    #[test]
    fn cancel_matrix() {
        assert_eq!(outcome(New.mark_cancelled()), Ok(Some(Cancelled)));
        assert_eq!(outcome(Completed.mark_cancelled()), Ok(Some(Cancelled)));
        assert_eq!(outcome(Cancelled.mark_cancelled()), Ok(None));
        for state in [Prepared, Delivered] {
            assert_eq!(
                state.mark_cancelled().unwrap_err().rejected_in(),
                Some(state)
            );
        }
    }

    #[test]
    fn complete_matrix() {
        let ledger = filled_ledger();
        assert_eq!(outcome(New.mark_completed(&ledger)), Ok(Some(Completed)));
        assert_eq!(outcome(Completed.mark_completed(&ledger)), Ok(None));
        for state in [Prepared, Delivered, Cancelled] {
            assert_eq!(
                state.mark_completed(&ledger),
                Err(OrderError::InvalidState {
                    state,
                    operation: OrderOperation::Complete
                })
            );
        }
    }

    #[test]
    fn complete_requires_pancakes() {
        assert_eq!(
            New.mark_completed(&Ledger::new()),
            Err(OrderError::EmptyOrder)
        );
    }

    #[test]
    fn prepare_matrix() {
        assert_eq!(outcome(Completed.mark_prepared()), Ok(Some(Prepared)));
        assert_eq!(outcome(Prepared.mark_prepared()), Ok(None));
        for state in [New, Delivered, Cancelled] {
            assert_eq!(state.mark_prepared().unwrap_err().rejected_in(), Some(state));
        }
    }

    #[test]
    fn deliver_matrix() {
        assert_eq!(outcome(Prepared.mark_delivered()), Ok(Some(Delivered)));
        assert_eq!(outcome(Delivered.mark_delivered()), Ok(None));
        for state in [New, Completed, Cancelled] {
            assert_eq!(state.mark_delivered().unwrap_err().rejected_in(), Some(state));
        }
    }

    #[test]
    fn only_new_orders_accept_contents_changes() {
        let pancake = Pancake::new([Ingredient::Hazelnuts]);
        for state in OrderState::ALL {
            let mut ledger = Ledger::new();
            let added = state.add_item(&mut ledger, &pancake, 1);
            let removed = state.remove_item(&mut ledger, &pancake, 1);
            if state == New {
                assert_eq!(added, Ok(1));
                assert_eq!(removed, Ok(Removal::Removed));
            } else {
                assert_eq!(added.unwrap_err().rejected_in(), Some(state));
                assert_eq!(removed.unwrap_err().rejected_in(), Some(state));
                assert!(ledger.is_empty());
            }
        }
    }

    #[test]
    fn state_is_checked_before_quantity() {
        let pancake = Pancake::plain();
        let err = Completed.add_item(&mut Ledger::new(), &pancake, 0).unwrap_err();
        assert_eq!(err.rejected_in(), Some(Completed));

        let err = New.remove_item(&mut Ledger::new(), &pancake, 0).unwrap_err();
        assert!(matches!(err, OrderError::InvalidArgument(_)));
    }

    #[test]
    fn terminal_states() {
        let terminal: Vec<_> = OrderState::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, vec![Delivered, Cancelled]);
        assert!(New.is_modifiable());
        assert!(!Completed.is_modifiable());
    }

    #[test]
    fn rejection_messages_name_operation_and_state() {
        let err = Completed
            .add_item(&mut Ledger::new(), &Pancake::plain(), 1)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot add pancakes to a completed order");

        let err = Delivered.mark_cancelled().unwrap_err();
        assert_eq!(err.to_string(), "cannot cancel a delivered order");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Prepared).unwrap(), "\"prepared\"");
        let parsed: OrderState = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, Cancelled);
    }
}
