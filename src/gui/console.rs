/// Console presenter
///
/// Lays slots out on a grid of fixed-size cells and mirrors every visual
/// change into an in-memory view that can be printed. Used by the terminal
/// host in place of a real renderer.

use parking_lot::RwLock;
use tracing::{debug, info};

use super::presenter::{HitTest, PresentationDriver};
use crate::types::{Item, ScreenPos};

#[derive(Debug, Default)]
struct ViewState {
    icons: Vec<Option<String>>,
    selector: Option<usize>,
    selector_visible: bool,
    label_text: String,
    label_alpha: f32,
}

pub struct ConsolePresenter {
    columns: usize,
    slot_size: f32,
    view: RwLock<ViewState>,
}

impl ConsolePresenter {
    pub fn new(capacity: usize, columns: usize, slot_size: f32) -> Self {
        Self {
            columns: columns.max(1),
            slot_size,
            view: RwLock::new(ViewState {
                icons: vec![None; capacity],
                ..ViewState::default()
            }),
        }
    }

    /// Top-left corner of a slot's cell
    pub fn slot_origin(&self, slot: usize) -> ScreenPos {
        let col = slot % self.columns;
        let row = slot / self.columns;
        ScreenPos::new(col as f32 * self.slot_size, row as f32 * self.slot_size)
    }

    /// Grid of the panel, selected slot in brackets, followed by the label
    pub fn render(&self) -> String {
        let view = self.view.read();
        let mut out = String::new();

        for (i, icon) in view.icons.iter().enumerate() {
            let name = icon.as_deref().unwrap_or("-");
            if view.selector_visible && view.selector == Some(i) {
                out.push_str(&format!("[{:>2}:{:<10}]", i, name));
            } else {
                out.push_str(&format!(" {:>2}:{:<10} ", i, name));
            }
            if (i + 1) % self.columns == 0 {
                out.push('\n');
            }
        }
        if !out.ends_with('\n') {
            out.push('\n');
        }
        if !view.label_text.is_empty() {
            out.push_str(&format!("label: {} ({:.0}%)\n", view.label_text, view.label_alpha * 100.0));
        }
        out
    }

    pub fn label(&self) -> (String, f32) {
        let view = self.view.read();
        (view.label_text.clone(), view.label_alpha)
    }
}

impl HitTest for ConsolePresenter {
    fn slot_at(&self, pos: ScreenPos) -> Option<usize> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        if pos.x < 0.0 || pos.y < 0.0 || self.slot_size <= 0.0 {
            return None;
        }
        let col = (pos.x / self.slot_size) as usize;
        let row = (pos.y / self.slot_size) as usize;
        if col >= self.columns {
            return None;
        }
        let slot = row.checked_mul(self.columns)?.checked_add(col)?;
        (slot < self.view.read().icons.len()).then_some(slot)
    }
}

impl PresentationDriver for ConsolePresenter {
    fn move_selector(&self, slot: usize) {
        let origin = self.slot_origin(slot);
        debug!("Selector -> slot {} at ({}, {})", slot, origin.x, origin.y);
        self.view.write().selector = Some(slot);
    }

    fn set_selector_visible(&self, visible: bool) {
        self.view.write().selector_visible = visible;
    }

    fn reset_drag_visual(&self, slot: usize) {
        let origin = self.slot_origin(slot);
        debug!("Slot {} visual back to ({}, {})", slot, origin.x, origin.y);
    }

    fn refresh_slot(&self, slot: usize, item: Option<&Item>) {
        if let Some(icon) = self.view.write().icons.get_mut(slot) {
            *icon = item.map(|i| i.name.clone());
        }
    }

    fn set_label_text(&self, text: &str) {
        if !text.is_empty() {
            info!("{}", text);
        }
        self.view.write().label_text = text.to_string();
    }

    fn set_label_alpha(&self, alpha: f32) {
        self.view.write().label_alpha = alpha;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_grid() {
        let presenter = ConsolePresenter::new(6, 4, 48.0);

        assert_eq!(presenter.slot_at(ScreenPos::new(10.0, 10.0)), Some(0));
        assert_eq!(presenter.slot_at(ScreenPos::new(150.0, 10.0)), Some(3));
        assert_eq!(presenter.slot_at(ScreenPos::new(50.0, 60.0)), Some(5));
        // second row has only two slots
        assert_eq!(presenter.slot_at(ScreenPos::new(100.0, 60.0)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(200.0, 10.0)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(-1.0, 10.0)), None);
    }

    #[test]
    fn test_hit_test_rejects_huge_and_nan_positions() {
        let presenter = ConsolePresenter::new(12, 4, 48.0);

        assert_eq!(presenter.slot_at(ScreenPos::new(0.0, 3e20)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(0.0, f32::MAX)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(f32::NAN, f32::NAN)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(10.0, f32::NAN)), None);
        assert_eq!(presenter.slot_at(ScreenPos::new(f32::INFINITY, 10.0)), None);
    }

    #[test]
    fn test_slot_origin_round_trips_through_hit_test() {
        let presenter = ConsolePresenter::new(8, 3, 32.0);
        for slot in 0..8 {
            let origin = presenter.slot_origin(slot);
            let inside = ScreenPos::new(origin.x + 1.0, origin.y + 1.0);
            assert_eq!(presenter.slot_at(inside), Some(slot));
        }
    }

    #[test]
    fn test_render_marks_selection() {
        let presenter = ConsolePresenter::new(2, 2, 48.0);
        presenter.refresh_slot(1, Some(&Item::new("Axe", "axe.png")));
        presenter.move_selector(1);
        presenter.set_selector_visible(true);

        let out = presenter.render();
        assert!(out.contains("[ 1:Axe"));
        assert!(out.contains("  0:-"));
    }
}
