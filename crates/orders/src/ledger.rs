//! Per-order quantity ledger.
//!
//! Only reachable through `Order`, which holds the lock; nothing in here
//! synchronizes on its own.

use std::collections::BTreeMap;

use pancakelab_pancakes::Pancake;

use crate::error::{OrderError, OrderResult};

#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerEntry {
    pancake: Pancake,
    count: i64,
}

/// Outcome of a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    /// No entry for the pancake; nothing changed.
    Absent,
    /// Entry kept with the remaining count.
    Decremented(i64),
    /// Entry deleted because the count reached zero (or would have gone below).
    Removed,
}

/// Ordered (pancake, count) entries. Every stored count is > 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add `count` pancakes, merging into an existing entry. Returns the new count.
    pub(crate) fn add(&mut self, pancake: &Pancake, count: i64) -> OrderResult<i64> {
        ensure_positive(count)?;

        match self.position(pancake) {
            Some(idx) => {
                let entry = &mut self.entries[idx];
                entry.count = entry
                    .count
                    .checked_add(count)
                    .ok_or_else(|| OrderError::invalid_argument("quantity overflow"))?;
                Ok(entry.count)
            }
            None => {
                self.entries.push(LedgerEntry {
                    pancake: pancake.clone(),
                    count,
                });
                Ok(count)
            }
        }
    }

    /// Remove up to `count` pancakes. Removing more than present deletes the entry.
    pub(crate) fn remove(&mut self, pancake: &Pancake, count: i64) -> OrderResult<Removal> {
        ensure_positive(count)?;

        let Some(idx) = self.position(pancake) else {
            return Ok(Removal::Absent);
        };

        let remaining = self.entries[idx].count - count;
        if remaining <= 0 {
            self.entries.remove(idx);
            Ok(Removal::Removed)
        } else {
            self.entries[idx].count = remaining;
            Ok(Removal::Decremented(remaining))
        }
    }

    /// Owned copy of the contents; later mutations do not show through it.
    pub(crate) fn snapshot(&self) -> BTreeMap<Pancake, i64> {
        self.entries
            .iter()
            .map(|e| (e.pancake.clone(), e.count))
            .collect()
    }

    /// Entries in insertion order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&Pancake, i64)> {
        self.entries.iter().map(|e| (&e.pancake, e.count))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, pancake: &Pancake) -> Option<usize> {
        self.entries.iter().position(|e| &e.pancake == pancake)
    }
}

fn ensure_positive(count: i64) -> OrderResult<()> {
    if count <= 0 {
        return Err(OrderError::invalid_argument(
            "quantity must be greater than zero",
        ));
    }
    Ok(())
}
