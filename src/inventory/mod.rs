pub mod manager;
pub mod slot;

pub use manager::InventoryStore;
pub use slot::Slot;
