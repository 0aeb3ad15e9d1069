//! Stock Tracker - bounded inventory with JSON persistence
//!
//! Holds a fixed-capacity product list in memory, persists it to a versioned
//! JSON snapshot, and auto-saves in the background while an interactive
//! console collects commands.

pub mod autosave;
pub mod console;
pub mod error;
pub mod persist;
pub mod product;
pub mod store;

pub use autosave::AutosaveTask;
pub use console::{parse, Command};
pub use error::{Result, StockError};
pub use persist::{load, save};
pub use product::Product;
pub use store::{Inventory, SharedInventory};
