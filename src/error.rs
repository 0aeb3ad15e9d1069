//! Error types for stock_tracker

use std::fmt;

/// Unified error type for store and persistence operations
#[derive(Debug)]
pub enum StockError {
    /// Inventory is at capacity, product was not added
    CapacityExceeded {
        capacity: usize,
    },
    /// No product with the given id exists in the inventory
    ProductNotFound(u32),
    /// Order quantity exceeds the available stock
    InsufficientStock {
        id: u32,
        requested: u32,
        available: u32,
    },
    /// Snapshot file I/O failed
    Io(std::io::Error),
    /// Failed to serialize or parse a snapshot
    Parse(serde_json::Error),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::CapacityExceeded { capacity } => {
                write!(f, "Inventory is full ({} products), cannot add more", capacity)
            }
            StockError::ProductNotFound(id) => write!(f, "Product not found: {}", id),
            StockError::InsufficientStock {
                id,
                requested,
                available,
            } => write!(
                f,
                "Insufficient stock for product {}: requested {}, available {}",
                id, requested, available
            ),
            StockError::Io(e) => write!(f, "I/O error: {}", e),
            StockError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for StockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StockError::Io(e) => Some(e),
            StockError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::Io(err)
    }
}

impl From<serde_json::Error> for StockError {
    fn from(err: serde_json::Error) -> Self {
        StockError::Parse(err)
    }
}

/// Result alias for stock_tracker operations
pub type Result<T> = std::result::Result<T, StockError>;
