//! Errors raised by inventory operations.

use thiserror::Error;

/// Broad classification of an [`InventoryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something unusable
    InvalidArgument,
    /// The operation makes no sense in the current store state
    InvalidState,
}

/// Errors that can occur while mutating the inventory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Tried to add an item without a name.
    #[error("cannot add an empty item")]
    EmptyItem,

    /// A swap referenced a slot outside the store.
    #[error("slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange {
        /// The offending index.
        index: usize,
        /// Store capacity.
        capacity: usize,
    },

    /// Both sides of a swap are empty.
    #[error("cannot swap empty slots {a} and {b}")]
    SwapEmptySlots {
        /// First slot.
        a: usize,
        /// Second slot.
        b: usize,
    },

    /// Selection requested while the inventory holds nothing.
    #[error("nothing to select, inventory is empty")]
    NothingToSelect,

    /// Deselect requested with no selection.
    #[error("no slot is selected")]
    NothingSelected,

    /// A drop arrived without a preceding drag-begin.
    #[error("no drag in progress")]
    NoActiveDrag,
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::EmptyItem | InventoryError::SlotOutOfRange { .. } => {
                ErrorKind::InvalidArgument
            }
            InventoryError::SwapEmptySlots { .. }
            | InventoryError::NothingToSelect
            | InventoryError::NothingSelected
            | InventoryError::NoActiveDrag => ErrorKind::InvalidState,
        }
    }
}

pub type InventoryResult<T> = std::result::Result<T, InventoryError>;
