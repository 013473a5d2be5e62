//! The watch cart: spots picked for an own trip.

use catalog::Spot;
use indexmap::IndexMap;

/// A spot in the cart, with its cost captured when it was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub spot_id: String,
    pub name: String,
    pub cost: u64,
}

impl From<&Spot> for CartItem {
    fn from(spot: &Spot) -> Self {
        Self {
            spot_id: spot.id.to_string(),
            name: spot.name.to_string(),
            cost: spot.cost,
        }
    }
}

/// Insertion-ordered set of spots, unique by spot id.
///
/// Backed by an `IndexMap` so order of selection is kept while lookups and
/// the uniqueness check stay keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchCart {
    items: IndexMap<String, CartItem>,
}

impl WatchCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a spot. Returns `false` if a spot with the same id is already present,
    /// in which case the existing entry (and its cost snapshot) is kept.
    pub fn add(&mut self, spot: &Spot) -> bool {
        if self.items.contains_key(spot.id) {
            return false;
        }
        self.items.insert(spot.id.to_string(), CartItem::from(spot));
        true
    }

    /// Remove a spot by id. Returns whether it was present.
    pub fn remove(&mut self, spot_id: &str) -> bool {
        self.items.shift_remove(spot_id).is_some()
    }

    pub fn contains(&self, spot_id: &str) -> bool {
        self.items.contains_key(spot_id)
    }

    /// Sum of the cost snapshots.
    pub fn total(&self) -> u64 {
        self.items.values().map(|item| item.cost).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in the order they were added.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Names in the order they were added.
    pub fn names(&self) -> Vec<String> {
        self.items.values().map(|item| item.name.clone()).collect()
    }
}
