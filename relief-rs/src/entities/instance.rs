use crate::entities::Item;
use crate::util::assertions;

/// Instance of the fractional loading problem: a set of items and the capacity of the carrier.
/// Built fresh for every run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Instance {
    /// The items available for loading, in input order
    pub items: Vec<Item>,
    /// Total weight the carrier can hold
    pub capacity: f64,
}

impl Instance {
    pub fn new(items: Vec<Item>, capacity: f64) -> Self {
        assert!(
            assertions::instance_item_ids_correct(&items),
            "All items should have consecutive IDs starting from 0"
        );
        assert!(
            assertions::instance_item_weights_positive(&items),
            "All items should have a strictly positive weight"
        );

        Self { items, capacity }
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn total_item_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight).sum()
    }

    pub fn total_importance(&self) -> f64 {
        self.items.iter().map(|item| item.importance).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
