use thiserror::Error;

use pancakelab_core::{DomainError, OrderId};
use pancakelab_infra::OrderStoreError;
use pancakelab_orders::OrderError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] OrderStoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("sorry, there is no pancake on the menu labelled '{0}'")]
    NoSuchPancake(String),

    #[error("order {0} not found")]
    OrderNotFound(OrderId),
}
