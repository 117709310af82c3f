/// Interaction mediator
///
/// Turns raw UI gestures (click, drag-begin, drop) into store operations,
/// drives the presentation collaborator and publishes [`InventoryEvent`]s.
/// All methods run on the host's event loop; only the selection label runs
/// as a separate task.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::events::EventHub;
use super::label::LabelTask;
use super::presenter::{HitTest, PresentationDriver};
use crate::config::Config;
use crate::error::{InventoryError, InventoryResult};
use crate::inventory::{InventoryStore, Slot};
use crate::types::{InventoryEvent, Item, ScreenPos};

pub struct InteractionMediator {
    store: InventoryStore,
    presenter: Arc<dyn PresentationDriver>,
    events: EventHub,
    label: LabelTask,
    /// Slot the current drag started from
    drag_source: Option<usize>,
}

impl InteractionMediator {
    /// Build the inventory for a freshly created panel
    ///
    /// Hides the selection indicator and seeds the configured starting items.
    /// Called inside a tokio runtime, the selection label fades on that
    /// runtime; otherwise labels are shown without fading.
    pub fn initialize(
        capacity: usize,
        config: &Config,
        presenter: Arc<dyn PresentationDriver>,
    ) -> InventoryResult<Self> {
        let mut mediator = Self {
            store: InventoryStore::new(capacity),
            label: LabelTask::new(Arc::clone(&presenter), config.label.clone()),
            presenter,
            events: EventHub::new(),
            drag_source: None,
        };

        mediator.presenter.set_selector_visible(false);
        for item in &config.starting_items {
            mediator.place_item(item.clone())?;
        }

        info!(
            "Inventory initialized with {} slot(s), {} item(s)",
            capacity,
            mediator.store.count()
        );
        Ok(mediator)
    }

    /// Register a listener for outward events
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<InventoryEvent> {
        self.events.subscribe()
    }

    /// A drag started on `slot`
    ///
    /// Only occupied slots can be dragged. Returns whether the drag was recorded.
    pub fn notify_drag_begin(&mut self, slot: usize) -> bool {
        if self.store.item_at(slot).is_none() {
            debug!("Ignoring drag on empty or unknown slot {}", slot);
            return false;
        }
        self.drag_source = Some(slot);
        debug!("Drag began on slot {}", slot);
        true
    }

    /// The dragged element was released over `target` (None when nothing was hit)
    pub fn notify_drop(&mut self, target: Option<usize>) -> InventoryResult<()> {
        let source = self.drag_source.take().ok_or(InventoryError::NoActiveDrag)?;

        let Some(item) = self.store.item_at(source).cloned() else {
            warn!("Dragged slot {} is empty, dropping nothing", source);
            self.presenter.reset_drag_visual(source);
            return Err(InventoryError::NoActiveDrag);
        };

        match target.filter(|&t| t != source && t < self.store.capacity()) {
            Some(target) => {
                self.store.swap_slots(target, source)?;
                self.refresh(source);
                self.refresh(target);
                info!("Dropped {} from slot {} onto slot {}", item.name, source, target);
                self.events.emit(InventoryEvent::ItemDropped {
                    item,
                    slot_index: target,
                    success: true,
                });
            }
            None => {
                self.presenter.reset_drag_visual(source);
                debug!("Drop of {} missed, returning to slot {}", item.name, source);
                self.events.emit(InventoryEvent::ItemDropped {
                    item,
                    slot_index: source,
                    success: false,
                });
            }
        }

        if let Some(selected) = self.store.selected_index() {
            self.presenter.move_selector(selected);
            self.presenter.set_selector_visible(true);
        }
        Ok(())
    }

    /// Resolve the drop target through `hit_test`, then handle the drop
    pub fn notify_drop_at(&mut self, pos: ScreenPos, hit_test: &dyn HitTest) -> InventoryResult<()> {
        let target = hit_test.slot_at(pos);
        debug!("Drop at ({}, {}) resolved to {:?}", pos.x, pos.y, target);
        self.notify_drop(target)
    }

    /// `slot` was clicked
    pub fn notify_click(&mut self, slot: usize) -> InventoryResult<()> {
        if self.drag_source.is_some() {
            debug!("Ignoring click on slot {} during drag", slot);
            return Ok(());
        }
        if self.store.selected_index() == Some(slot) {
            return Ok(());
        }

        self.store.select_item(slot)?;
        if self.store.selected_index() != Some(slot) {
            return Ok(());
        }
        let Some(item) = self.store.item_at(slot).cloned() else {
            return Ok(());
        };

        self.presenter.move_selector(slot);
        self.presenter.set_selector_visible(true);
        self.label.start(&item.name);

        info!("Selected {} in slot {}", item.name, slot);
        self.events.emit(InventoryEvent::ItemSelected { item });
        Ok(())
    }

    /// Add an item and announce it
    ///
    /// `ItemAdded` is published even when the store was full and kept nothing.
    pub fn add_item(&mut self, item: Item) -> InventoryResult<()> {
        self.place_item(item.clone())?;
        self.events.emit(InventoryEvent::ItemAdded { item });
        Ok(())
    }

    /// Clear a slot
    ///
    /// Removing the item being dragged cancels the drag, so the following
    /// drop reports [`InventoryError::NoActiveDrag`].
    pub fn remove_item(&mut self, index: usize) {
        let was_selected = self.store.selected_index() == Some(index);
        self.store.remove_item(index);

        if self.drag_source == Some(index) && self.store.item_at(index).is_none() {
            self.drag_source = None;
            self.presenter.reset_drag_visual(index);
            debug!("Drag from slot {} cancelled by removal", index);
        }

        if index < self.store.capacity() {
            self.refresh(index);
        }
        if was_selected && self.store.selected_index().is_none() {
            self.presenter.set_selector_visible(false);
        }
    }

    pub fn deselect(&mut self) -> InventoryResult<()> {
        self.store.deselect()?;
        self.presenter.set_selector_visible(false);
        Ok(())
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    pub fn item_count(&self) -> usize {
        self.store.count()
    }

    pub fn drag_source(&self) -> Option<usize> {
        self.drag_source
    }

    fn place_item(&mut self, item: Item) -> InventoryResult<()> {
        let free = self.store.slots().iter().position(Slot::is_empty);
        self.store.add_item(item)?;
        if let Some(index) = free {
            self.refresh(index);
        }
        Ok(())
    }

    fn refresh(&self, index: usize) {
        self.presenter.refresh_slot(index, self.store.item_at(index));
    }
}
