//! Order lifecycle errors.

use thiserror::Error;

use crate::state::{OrderOperation, OrderState};

pub type OrderResult<T> = Result<T, OrderError>;

/// Failure of an order operation.
///
/// Every variant is returned before the order is touched: a failed call
/// leaves contents, state and version exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// A caller-supplied value was out of range (e.g. non-positive quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Building or room number was not positive.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The operation is not permitted in the order's current state.
    #[error("cannot {operation} a {state} order")]
    InvalidState {
        state: OrderState,
        operation: OrderOperation,
    },

    /// Completing an order that has no pancakes.
    #[error("cannot complete an order with no pancakes")]
    EmptyOrder,

    /// A thread panicked while holding the order's lock.
    #[error("order lock poisoned")]
    LockPoisoned,
}

impl OrderError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// State the order was in when an `InvalidState` rejection happened.
    pub fn rejected_in(&self) -> Option<OrderState> {
        match self {
            OrderError::InvalidState { state, .. } => Some(*state),
            _ => None,
        }
    }
}
