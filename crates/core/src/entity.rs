//! Entity trait: identity that survives state changes.

/// An object whose equality is decided by its identifier, not its attributes.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
