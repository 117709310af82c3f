use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to the asset used to draw an item (sprite path, atlas key, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(pub String);

impl ImageHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named, displayable entity that can sit in a slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Human readable name, shown by the selection label
    pub name: String,

    /// Asset used to draw this item
    #[serde(default)]
    pub image: ImageHandle,
}

impl Item {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: ImageHandle::new(image),
        }
    }

    /// An item without a usable name stands in for "no item" and is rejected by the store.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// A point in screen/scene space, as reported by the pointer
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPos {
    pub x: f32,
    pub y: f32,
}

impl ScreenPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Notifications published to the presentation/game layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InventoryEvent {
    /// A click changed the selection
    ItemSelected { item: Item },

    /// One per drop gesture. `slot_index` is where the dragged item rests afterwards.
    ItemDropped {
        item: Item,
        #[serde(rename = "slotIndex")]
        slot_index: usize,
        success: bool,
    },

    /// An add request went through the mediator (fired even when the store was full)
    ItemAdded { item: Item },
}

impl InventoryEvent {
    pub fn item(&self) -> &Item {
        match self {
            InventoryEvent::ItemSelected { item }
            | InventoryEvent::ItemDropped { item, .. }
            | InventoryEvent::ItemAdded { item } => item,
        }
    }
}
