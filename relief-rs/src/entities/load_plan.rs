/// The portion of a single [`Item`](crate::entities::Item) that was loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlanEntry {
    pub item_id: usize,
    pub name: String,
    /// Always in `(0, item.weight]`
    pub weight_loaded: f64,
    pub utility_obtained: f64,
    /// Always in `(0, 100]`
    pub fraction_loaded_percent: f64,
}

/// Result of a single allocation run.
/// Entries are ordered in which the items were consumed, i.e. by descending priority ratio.
/// Items which received nothing do not appear.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPlan {
    pub entries: Vec<LoadPlanEntry>,
    pub capacity: f64,
    pub total_utility: f64,
    pub total_weight_loaded: f64,
}

impl LoadPlan {
    /// A plan in which nothing is loaded.
    pub fn empty(capacity: f64) -> Self {
        LoadPlan {
            entries: vec![],
            capacity,
            total_utility: 0.0,
            total_weight_loaded: 0.0,
        }
    }

    /// Loaded weight as a percentage of the capacity, 0 for a carrier without capacity.
    pub fn utilization_percent(&self) -> f64 {
        if self.capacity > 0.0 {
            self.total_weight_loaded / self.capacity * 100.0
        } else {
            0.0
        }
    }

    pub fn remaining_capacity(&self) -> f64 {
        f64::max(self.capacity - self.total_weight_loaded, 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that were only partially loaded.
    pub fn n_partial(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.fraction_loaded_percent < 100.0)
            .count()
    }
}
