//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their attributes.
///
/// Two value objects built from the same attributes are interchangeable:
/// they compare equal and hash equal, so they can be used as map keys.
/// "Modifying" a value object means constructing a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Address { building: u32, room: u32 }
///
/// impl ValueObject for Address {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
