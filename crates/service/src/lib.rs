//! Orchestration layer.
//!
//! Translates external requests (order ids, menu labels, raw address
//! numbers) into operations on the order aggregate, and keeps the order
//! store in step with terminal transitions.

pub mod config;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use service::PancakeService;
