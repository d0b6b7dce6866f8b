//! Orders domain module.
//!
//! The `Order` aggregate, its delivery address, the per-order ledger of
//! pancakes and the lifecycle state machine that decides which mutations
//! are legal. Orders are safe to share between threads; each one carries
//! its own read/write lock.

pub mod address;
pub mod error;
mod ledger;
pub mod order;
pub mod state;

pub use address::Address;
pub use error::{OrderError, OrderResult};
pub use order::{Order, OrderLine, OrderView};
pub use state::{OrderOperation, OrderState};
