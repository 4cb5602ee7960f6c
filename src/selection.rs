//! Pack Selections

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

/// One way of fulfilling an order: pack size mapped to the number of packs.
///
/// Zero counts are never stored, so two selections compare equal exactly when
/// they use the same sizes with the same counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackSelection(BTreeMap<u64, u64>);

impl PackSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding `count` packs of a single size.
    #[must_use]
    pub fn single(size: u64, count: u64) -> Self {
        let mut selection = Self::new();

        selection.add(size, count);

        selection
    }

    /// Add `count` packs of `size`.
    pub fn add(&mut self, size: u64, count: u64) {
        if count > 0 {
            *self.0.entry(size).or_default() += count;
        }
    }

    /// Remove up to `count` packs of `size`, dropping the entry when it reaches zero.
    pub fn remove(&mut self, size: u64, count: u64) {
        if let btree_map::Entry::Occupied(mut entry) = self.0.entry(size) {
            let remaining = entry.get().saturating_sub(count);

            if remaining == 0 {
                entry.remove();
            } else {
                entry.insert(remaining);
            }
        }
    }

    /// Number of packs of `size` in the selection.
    #[must_use]
    pub fn count(&self, size: u64) -> u64 {
        self.0.get(&size).copied().unwrap_or_default()
    }

    /// Whether the selection uses no packs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of packs.
    #[must_use]
    pub fn total_packs(&self) -> u64 {
        self.0.values().sum()
    }

    /// Total number of items shipped across all packs.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.0
            .iter()
            .map(|(size, count)| size.saturating_mul(*count))
            .fold(0, u64::saturating_add)
    }

    /// Whether the selection ships at least `quantity` items.
    #[must_use]
    pub fn covers(&self, quantity: u64) -> bool {
        self.total_items() >= quantity
    }

    /// Iterate `(size, count)` entries, largest size first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u64, u64)> + '_ {
        self.0.iter().rev().map(|(size, count)| (*size, *count))
    }

    /// Consume the selection, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<u64, u64> {
        self.0
    }
}

impl From<BTreeMap<u64, u64>> for PackSelection {
    fn from(mut packs: BTreeMap<u64, u64>) -> Self {
        packs.retain(|_, count| *count > 0);

        Self(packs)
    }
}

impl<const N: usize> From<[(u64, u64); N]> for PackSelection {
    fn from(packs: [(u64, u64); N]) -> Self {
        packs.into_iter().fold(Self::new(), |mut selection, (size, count)| {
            selection.add(size, count);
            selection
        })
    }
}
