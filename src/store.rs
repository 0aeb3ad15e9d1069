//! In-memory inventory store
//!
//! Holds the authoritative product list with a capacity fixed at construction.
//! The store itself is single-threaded; concurrent access goes through
//! [`SharedInventory`], and every operation (including the background saver's
//! read) locks it for the full duration of the call.

use crate::error::{Result, StockError};
use crate::product::Product;
use std::sync::{Arc, Mutex};

/// Process-wide handle to the inventory, shared between the console loop and
/// the auto-save task. The mutex is never held across an await point.
pub type SharedInventory = Arc<Mutex<Inventory>>;

/// Bounded, ordered product collection.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    capacity: usize,
}

impl Inventory {
    /// Create an empty inventory that can hold up to `capacity` products.
    pub fn new(capacity: usize) -> Self {
        Inventory {
            products: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild an inventory from previously persisted products.
    ///
    /// Used by the loader; truncates to `capacity` if the snapshot holds more
    /// entries than the store is allowed to.
    pub(crate) fn from_products(mut products: Vec<Product>, capacity: usize) -> Self {
        if products.len() > capacity {
            log::warn!(
                "Snapshot holds {} products but capacity is {}, truncating",
                products.len(),
                capacity
            );
            products.truncate(capacity);
        }
        Inventory { products, capacity }
    }

    /// Append a new product.
    ///
    /// Ids are not checked for duplicates; a second product with the same id
    /// is simply shadowed by the first on lookup. Fails with
    /// `CapacityExceeded` when the inventory is full, leaving it unchanged.
    pub fn add_product(
        &mut self,
        id: u32,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
    ) -> Result<()> {
        if self.products.len() >= self.capacity {
            return Err(StockError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.products.push(Product::new(id, name, quantity, price));
        Ok(())
    }

    /// Overwrite the stock count of the first product with a matching id.
    pub fn update_stock(&mut self, id: u32, new_quantity: u32) -> Result<()> {
        match self.products.iter_mut().find(|p| p.id() == id) {
            Some(product) => {
                product.set_quantity(new_quantity);
                Ok(())
            }
            None => Err(StockError::ProductNotFound(id)),
        }
    }

    /// Decrement the stock of the first product with a matching id.
    ///
    /// Fails with `InsufficientStock` (and no mutation) when the order exceeds
    /// the available quantity.
    pub fn place_order(&mut self, id: u32, quantity: u32) -> Result<()> {
        match self.products.iter_mut().find(|p| p.id() == id) {
            Some(product) => {
                let available = product.quantity();
                if available < quantity {
                    return Err(StockError::InsufficientStock {
                        id,
                        requested: quantity,
                        available,
                    });
                }
                product.set_quantity(available - quantity);
                Ok(())
            }
            None => Err(StockError::ProductNotFound(id)),
        }
    }

    /// All live products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// First product with a matching id, if any.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.products.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_inventory(capacity: usize) -> Inventory {
        let mut inv = Inventory::new(capacity);
        for i in 0..capacity as u32 {
            inv.add_product(i + 1, format!("Product {}", i + 1), 10, 1.0)
                .unwrap();
        }
        inv
    }

    #[test]
    fn add_product_preserves_insertion_order() {
        let mut inv = Inventory::new(3);
        inv.add_product(3, "Third", 1, 1.0).unwrap();
        inv.add_product(1, "First", 2, 2.0).unwrap();
        inv.add_product(2, "Second", 3, 3.0).unwrap();

        let ids: Vec<u32> = inv.products().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn add_product_rejects_when_full() {
        let mut inv = full_inventory(2);
        let before: Vec<Product> = inv.products().to_vec();

        let err = inv.add_product(99, "Extra", 1, 1.0).unwrap_err();
        assert!(matches!(err, StockError::CapacityExceeded { capacity: 2 }));
        assert_eq!(inv.products(), before.as_slice());
    }

    #[test]
    fn add_product_allows_duplicate_ids() {
        let mut inv = Inventory::new(2);
        inv.add_product(1, "Original", 5, 1.0).unwrap();
        inv.add_product(1, "Shadowed", 9, 2.0).unwrap();
        assert_eq!(inv.len(), 2);
        // Lookup always resolves to the first entry
        assert_eq!(inv.get(1).unwrap().name(), "Original");
    }

    #[test]
    fn update_stock_changes_only_matched_entry() {
        let mut inv = Inventory::new(3);
        inv.add_product(1, "Widget", 10, 2.5).unwrap();
        inv.add_product(2, "Gadget", 5, 9.99).unwrap();

        inv.update_stock(2, 0).unwrap();

        assert_eq!(inv.get(1).unwrap().quantity(), 10);
        let gadget = inv.get(2).unwrap();
        assert_eq!(gadget.quantity(), 0);
        assert_eq!(gadget.name(), "Gadget");
        assert!((gadget.price() - 9.99).abs() < f64::EPSILON);
    }

    #[test]
    fn update_stock_missing_id_leaves_list_unchanged() {
        let mut inv = Inventory::new(2);
        inv.add_product(1, "Widget", 10, 2.5).unwrap();
        let before: Vec<Product> = inv.products().to_vec();

        let err = inv.update_stock(42, 7).unwrap_err();
        assert!(matches!(err, StockError::ProductNotFound(42)));
        assert_eq!(inv.products(), before.as_slice());
    }

    #[test]
    fn update_stock_hits_first_duplicate() {
        let mut inv = Inventory::new(2);
        inv.add_product(1, "Original", 5, 1.0).unwrap();
        inv.add_product(1, "Shadowed", 5, 1.0).unwrap();

        inv.update_stock(1, 99).unwrap();

        assert_eq!(inv.products()[0].quantity(), 99);
        assert_eq!(inv.products()[1].quantity(), 5);
    }

    #[test]
    fn place_order_decrements_stock() {
        let mut inv = Inventory::new(2);
        inv.add_product(1, "Widget", 10, 2.5).unwrap();

        inv.place_order(1, 4).unwrap();
        assert_eq!(inv.get(1).unwrap().quantity(), 6);
    }

    #[test]
    fn place_order_rejects_insufficient_stock_without_mutation() {
        let mut inv = Inventory::new(2);
        inv.add_product(1, "Widget", 3, 2.5).unwrap();

        let err = inv.place_order(1, 4).unwrap_err();
        assert!(matches!(
            err,
            StockError::InsufficientStock {
                id: 1,
                requested: 4,
                available: 3
            }
        ));
        assert_eq!(inv.get(1).unwrap().quantity(), 3);
    }

    #[test]
    fn place_order_exact_quantity_drains_stock() {
        let mut inv = Inventory::new(1);
        inv.add_product(1, "Widget", 5, 1.0).unwrap();
        inv.place_order(1, 5).unwrap();
        assert_eq!(inv.get(1).unwrap().quantity(), 0);
    }

    #[test]
    fn place_order_missing_id_reports_not_found() {
        let mut inv = Inventory::new(1);
        let err = inv.place_order(8, 1).unwrap_err();
        assert!(matches!(err, StockError::ProductNotFound(8)));
    }

    #[test]
    fn from_products_truncates_oversized_snapshot() {
        let products = vec![
            Product::new(1, "A", 1, 1.0),
            Product::new(2, "B", 2, 2.0),
            Product::new(3, "C", 3, 3.0),
        ];
        let inv = Inventory::from_products(products, 2);
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.capacity(), 2);
        assert_eq!(inv.products()[1].id(), 2);
    }

    #[test]
    fn zero_capacity_rejects_every_add() {
        let mut inv = Inventory::new(0);
        assert!(inv.is_full());
        assert!(inv.add_product(1, "Widget", 1, 1.0).is_err());
        assert!(inv.is_empty());
    }
}
