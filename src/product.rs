//! Product record for the inventory store

use serde::{Deserialize, Serialize};
use std::fmt;

/// One inventory line item.
///
/// Only `quantity` ever changes after construction, and only the store's
/// update and order operations are allowed to change it. Ids are
/// caller-supplied and not checked for uniqueness; lookups take the first
/// match in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: u32,
    name: String,
    quantity: u32,
    price: f64,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, quantity: u32, price: f64) -> Self {
        Product {
            id,
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Quantity: {}, Price: ${}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_format() {
        let p = Product::new(1, "Widget", 10, 2.5);
        assert_eq!(p.to_string(), "ID: 1, Name: Widget, Quantity: 10, Price: $2.5");
    }

    #[test]
    fn accessors_return_constructed_values() {
        let p = Product::new(7, "Gadget", 3, 9.99);
        assert_eq!(p.id(), 7);
        assert_eq!(p.name(), "Gadget");
        assert_eq!(p.quantity(), 3);
        assert!((p.price() - 9.99).abs() < f64::EPSILON);
    }
}
