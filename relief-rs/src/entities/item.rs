/// Divisible item that can be (partially) loaded onto the carrier.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Position of the item within its [`Instance`](crate::entities::Instance)
    pub id: usize,
    /// Label of the item, not necessarily unique
    pub name: String,
    /// Weight of the full item, always strictly positive
    pub weight: f64,
    /// Utility obtained when the full item is loaded
    pub importance: f64,
}

impl Item {
    pub fn new(id: usize, name: impl Into<String>, weight: f64, importance: f64) -> Item {
        debug_assert!(weight > 0.0, "item weight must be strictly positive: {weight}");
        Item {
            id,
            name: name.into(),
            weight,
            importance,
        }
    }

    /// Utility per unit of weight, the key by which items are ranked.
    pub fn priority_ratio(&self) -> f64 {
        self.importance / self.weight
    }

    /// Utility obtained when `weight_loaded` of this item is loaded.
    pub fn utility_of(&self, weight_loaded: f64) -> f64 {
        self.importance * (weight_loaded / self.weight)
    }
}

/// An [`Item`] decorated with its priority ratio.
/// A sequence of these in descending ratio order explains why a load plan looks the way it does.
#[derive(Clone, Debug, PartialEq)]
pub struct PrioritizedItem {
    pub item: Item,
    pub priority_ratio: f64,
}

impl From<&Item> for PrioritizedItem {
    fn from(item: &Item) -> Self {
        PrioritizedItem {
            item: item.clone(),
            priority_ratio: item.priority_ratio(),
        }
    }
}
