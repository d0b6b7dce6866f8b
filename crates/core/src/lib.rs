//! `pancakelab-core` — shared domain primitives.
//!
//! Identity, value semantics and the domain error type used by every other
//! crate in the workspace. Nothing here performs IO.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use value_object::ValueObject;
