use crate::types::Item;

/// A single addressable position in the inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub(crate) item: Option<Item>,
    pub(crate) index: usize,
}

impl Slot {
    pub(crate) fn empty(index: usize) -> Self {
        Self { item: None, index }
    }

    /// Item held by this slot, if any
    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    /// Position of this slot inside its store
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}
