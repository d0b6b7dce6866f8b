//! Aggregate root trait.

use crate::entity::Entity;

/// An entity that is the sole entry point for mutating the data it owns.
///
/// Aggregates guard their own invariants. Callers never reach into the
/// owned parts (e.g. an order's ledger) directly; they go through the
/// aggregate's operations, which decide whether the mutation is legal.
pub trait AggregateRoot: Entity {
    /// Number of committed mutations applied to the aggregate so far.
    ///
    /// Rejected operations and no-op transitions leave it unchanged.
    fn version(&self) -> u64;
}
