//! Snapshot persistence for the inventory store
//!
//! Serializes the full product list to a versioned JSON file. Writes go to a
//! sibling temp file first and are renamed into place, so a crash mid-save
//! never leaves a torn snapshot behind. A missing, unreadable, or
//! wrong-version file on load is a normal fresh start, not an error.

use crate::error::Result;
use crate::product::Product;
use crate::store::Inventory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current snapshot format version. A snapshot with any other version is
/// treated the same as a corrupt file.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk snapshot layout. The product array length is the record count.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    saved_at: String,
    products: Vec<Product>,
}

/// Save the full inventory to `path`, overwriting any prior snapshot.
///
/// The in-memory state is never rolled back on failure; callers log the error
/// and carry on.
pub fn save(inventory: &Inventory, path: &Path) -> Result<()> {
    let snapshot = Snapshot {
        version: FORMAT_VERSION,
        saved_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%z").to_string(),
        products: inventory.products().to_vec(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;

    // Write-then-rename so a failed save cannot clobber the previous snapshot
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    log::info!("Saved {} products to {}", inventory.len(), path.display());
    Ok(())
}

/// Load a previously saved inventory from `path`.
///
/// Absent, unreadable, unparsable, or wrong-version snapshots all fall back to
/// an empty inventory with the requested capacity. A snapshot with more
/// entries than `capacity` is truncated.
pub fn load(path: &Path, capacity: usize) -> Inventory {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::info!(
                "No previous inventory at {} ({}), starting fresh",
                path.display(),
                e
            );
            return Inventory::new(capacity);
        }
    };

    let snapshot: Snapshot = match serde_json::from_slice(&bytes) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!(
                "Could not parse snapshot at {} ({}), starting fresh",
                path.display(),
                e
            );
            return Inventory::new(capacity);
        }
    };

    if snapshot.version != FORMAT_VERSION {
        log::warn!(
            "Snapshot at {} has unsupported version {}, starting fresh",
            path.display(),
            snapshot.version
        );
        return Inventory::new(capacity);
    }

    log::info!(
        "Loaded {} products from {} (saved at {})",
        snapshot.products.len(),
        path.display(),
        snapshot.saved_at
    );
    Inventory::from_products(snapshot.products, capacity)
}
