/// Inventory store
///
/// Fixed-capacity, ordered collection of slots plus the current selection.
/// Capacity is set once at construction; every mutation keeps the occupied
/// counter, slot indices and selection consistent with the slot contents.

use tracing::{debug, info};

use super::slot::Slot;
use crate::error::{InventoryError, InventoryResult};
use crate::types::Item;

/// Inventory store
#[derive(Debug, Clone)]
pub struct InventoryStore {
    /// Slots, always `capacity` long
    slots: Vec<Slot>,
    /// Number of slots holding an item
    occupied: usize,
    /// Index of the selected slot, only ever points at an occupied slot
    selected: Option<usize>,
}

impl InventoryStore {
    /// Create a store with `capacity` empty slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(Slot::empty).collect(),
            occupied: 0,
            selected: None,
        }
    }

    /// Put an item into the lowest-indexed free slot
    ///
    /// Does nothing when the store is full.
    pub fn add_item(&mut self, item: Item) -> InventoryResult<()> {
        if item.is_empty() {
            return Err(InventoryError::EmptyItem);
        }
        if self.is_full() {
            debug!("Inventory full, ignoring {}", item.name);
            return Ok(());
        }

        if let Some(slot) = self.slots.iter_mut().find(|s| s.item.is_none()) {
            info!("Added {} to slot {}", item.name, slot.index);
            slot.item = Some(item);
            self.occupied += 1;
        }
        Ok(())
    }

    /// Clear the slot at `index`
    ///
    /// Out-of-range indices and empty slots are ignored. Removing the selected
    /// slot clears the selection first.
    pub fn remove_item(&mut self, index: usize) {
        if index >= self.capacity() || self.occupied == 0 {
            return;
        }
        if self.slots[index].item.is_none() {
            return;
        }

        if self.selected == Some(index) {
            self.selected = None;
        }

        if let Some(item) = self.slots[index].item.take() {
            info!("Removed {} from slot {}", item.name, index);
        }
        self.occupied -= 1;
    }

    /// Exchange the contents of two slots
    ///
    /// Moving into an empty slot is allowed; swapping two empty slots is not.
    /// The selection follows the item it points at.
    pub fn swap_slots(&mut self, a: usize, b: usize) -> InventoryResult<()> {
        let capacity = self.capacity();
        for index in [a, b] {
            if index >= capacity {
                return Err(InventoryError::SlotOutOfRange { index, capacity });
            }
        }
        if self.slots[a].item.is_none() && self.slots[b].item.is_none() {
            return Err(InventoryError::SwapEmptySlots { a, b });
        }

        self.slots.swap(a, b);
        self.slots[a].index = a;
        self.slots[b].index = b;

        self.selected = match self.selected {
            Some(s) if s == a => Some(b),
            Some(s) if s == b => Some(a),
            other => other,
        };

        debug!("Swapped slots {} <-> {}", a, b);
        Ok(())
    }

    /// Mark the slot at `index` as selected
    ///
    /// Out-of-range indices and empty slots leave the selection unchanged.
    pub fn select_item(&mut self, index: usize) -> InventoryResult<()> {
        if self.occupied == 0 {
            return Err(InventoryError::NothingToSelect);
        }

        match self.slots.get(index) {
            Some(slot) if slot.item.is_some() => {
                self.selected = Some(index);
                debug!("Selected slot {}", index);
            }
            _ => {}
        }
        Ok(())
    }

    pub fn deselect(&mut self) -> InventoryResult<()> {
        if self.selected.take().is_none() {
            return Err(InventoryError::NothingSelected);
        }
        Ok(())
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.occupied
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The selected slot, if any
    pub fn selected_slot(&self) -> Option<&Slot> {
        self.selected.map(|i| &self.slots[i])
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Get slot at index
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Get item at index
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.slots.get(index)?.item.as_ref()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}
