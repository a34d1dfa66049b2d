//! Inventory capacity management.
//!
//! Storage counts total item quantity against a limit; a limit of
//! [`STORAGE_UNLIMITED`] lifts the cap. Adds are capacity-clamped and
//! report the overflow instead of failing, so callers decide whether a
//! partial add is a spill or a success.

use crate::shared::*;

impl Inventory {
    /// Unbounded storage, for containers with no capacity rule.
    pub fn unlimited() -> Self {
        Self {
            entries: Vec::new(),
            limit: STORAGE_UNLIMITED,
        }
    }

    pub fn with_limit(limit: i64) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Total quantity across all stacks.
    pub fn space_consumed(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Remaining capacity, or `None` for unlimited storage.
    pub fn space_remaining(&self) -> Option<i64> {
        if self.limit == STORAGE_UNLIMITED {
            None
        } else {
            Some(self.limit - self.space_consumed() as i64)
        }
    }

    pub fn does_space_remain(&self) -> bool {
        match self.space_remaining() {
            Some(remaining) => remaining > 0,
            None => true,
        }
    }

    /// Quantity held of a single item.
    pub fn count(&self, id: &str) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Add up to `quantity` of an item, stacking with any existing entry.
    /// Returns the overflow that did not fit.
    pub fn try_add(&mut self, id: &str, quantity: u32) -> u32 {
        let accepted = match self.space_remaining() {
            Some(remaining) => (quantity as i64).min(remaining.max(0)) as u32,
            None => quantity,
        };
        if accepted == 0 {
            return quantity;
        }

        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.quantity += accepted,
            None => self.entries.push(InventoryEntry {
                id: id.to_string(),
                quantity: accepted,
            }),
        }
        quantity - accepted
    }

    /// Remove up to `quantity` of an item, dropping emptied stacks.
    /// Returns how much was actually removed.
    pub fn try_remove(&mut self, id: &str, quantity: u32) -> u32 {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return 0;
        };
        let entry = &mut self.entries[index];
        let removed = entry.quantity.min(quantity);
        entry.quantity -= removed;
        if entry.quantity == 0 {
            self.entries.remove(index);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_stack_with_existing_entries() {
        let mut inventory = Inventory::with_limit(10);
        assert_eq!(inventory.try_add("carrot", 3), 0);
        assert_eq!(inventory.try_add("carrot", 2), 0);
        assert_eq!(inventory.entries.len(), 1);
        assert_eq!(inventory.count("carrot"), 5);
    }

    #[test]
    fn overflow_is_returned_not_dropped() {
        let mut inventory = Inventory::with_limit(5);
        assert_eq!(inventory.try_add("pumpkin", 8), 3);
        assert_eq!(inventory.count("pumpkin"), 5);
        assert!(!inventory.does_space_remain());
        assert_eq!(inventory.try_add("carrot", 1), 1, "nothing fits when full");
    }

    #[test]
    fn unlimited_storage_never_overflows() {
        let mut inventory = Inventory::unlimited();
        assert_eq!(inventory.try_add("ore", 1_000_000), 0);
        assert_eq!(inventory.space_remaining(), None);
        assert!(inventory.does_space_remain());
    }

    #[test]
    fn removal_drops_emptied_stacks() {
        let mut inventory = Inventory::with_limit(10);
        inventory.try_add("carrot", 4);
        assert_eq!(inventory.try_remove("carrot", 6), 4, "clamped to what is held");
        assert!(inventory.entries.is_empty());
        assert_eq!(inventory.try_remove("carrot", 1), 0);
    }

    #[test]
    fn default_storage_uses_the_standard_limit() {
        let inventory = Inventory::default();
        assert_eq!(inventory.space_remaining(), Some(STANDARD_STORAGE_LIMIT));
    }
}
