//! Test doubles for the presentation collaborators.

use parking_lot::Mutex;

use super::presenter::{HitTest, PresentationDriver};
use crate::types::{Item, ScreenPos};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MoveSelector(usize),
    SelectorVisible(bool),
    ResetDrag(usize),
    Refresh(usize, Option<String>),
}

/// Presenter that records every call it receives
#[derive(Default)]
pub struct RecordingPresenter {
    calls: Mutex<Vec<Call>>,
    label: Mutex<(String, f32)>,
}

impl RecordingPresenter {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock())
    }

    pub fn label(&self) -> (String, f32) {
        self.label.lock().clone()
    }
}

impl PresentationDriver for RecordingPresenter {
    fn move_selector(&self, slot: usize) {
        self.calls.lock().push(Call::MoveSelector(slot));
    }

    fn set_selector_visible(&self, visible: bool) {
        self.calls.lock().push(Call::SelectorVisible(visible));
    }

    fn reset_drag_visual(&self, slot: usize) {
        self.calls.lock().push(Call::ResetDrag(slot));
    }

    fn refresh_slot(&self, slot: usize, item: Option<&Item>) {
        self.calls
            .lock()
            .push(Call::Refresh(slot, item.map(|i| i.name.clone())));
    }

    fn set_label_text(&self, text: &str) {
        self.label.lock().0 = text.to_string();
    }

    fn set_label_alpha(&self, alpha: f32) {
        self.label.lock().1 = alpha;
    }
}

/// Hit test that maps x to a slot index, one unit per slot
pub struct RowHitTest {
    pub slots: usize,
}

impl HitTest for RowHitTest {
    fn slot_at(&self, pos: ScreenPos) -> Option<usize> {
        if pos.x < 0.0 || pos.y < 0.0 || pos.y >= 1.0 {
            return None;
        }
        let slot = pos.x as usize;
        (slot < self.slots).then_some(slot)
    }
}
