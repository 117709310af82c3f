/// Collaborators the inventory talks to but does not implement
///
/// Rendering, transforms and pointer hit-testing belong to the host UI. The
/// mediator only ever reaches them through these two traits.

use crate::types::{Item, ScreenPos};

/// Resolves a pointer position to the slot under it
pub trait HitTest {
    /// Slot index under `pos`, or None when the pointer is over no slot
    fn slot_at(&self, pos: ScreenPos) -> Option<usize>;
}

/// Visual side of the inventory panel
///
/// Methods take `&self` because the label task calls them from its own task
/// while the mediator keeps using the same driver.
pub trait PresentationDriver: Send + Sync {
    /// Place the selection indicator over `slot`
    fn move_selector(&self, slot: usize);

    fn set_selector_visible(&self, visible: bool);

    /// Snap the dragged visual of `slot` back to where the drag started
    fn reset_drag_visual(&self, slot: usize);

    /// Redraw `slot` with its current content
    fn refresh_slot(&self, slot: usize, item: Option<&Item>);

    fn set_label_text(&self, text: &str);

    /// Label visibility in `[0.0, 1.0]`
    fn set_label_alpha(&self, alpha: f32);
}
