//! Slot inventory
//!
//! Fixed-capacity inventory panel driven by drag-and-drop gestures: items are
//! added, removed, selected and swapped between slots, and every interaction
//! is published as an [`InventoryEvent`]. Rendering and hit-testing stay with
//! the host through the [`PresentationDriver`] and [`HitTest`] traits.

pub mod command;
pub mod config;
pub mod error;
pub mod gui;
pub mod inventory;
pub mod logging;
pub mod types;

pub use error::{ErrorKind, InventoryError, InventoryResult};
pub use gui::{ConsolePresenter, HitTest, InteractionMediator, PresentationDriver};
pub use inventory::{InventoryStore, Slot};
pub use types::{ImageHandle, InventoryEvent, Item, ScreenPos};
