use serde::{Deserialize, Serialize};

/// External representation of an [`Item`](crate::entities::Item), as entered manually or read from JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Label of the item
    pub name: String,
    /// Weight of the full item (kg or any other consistent unit)
    pub weight: f64,
    /// Utility score of the full item
    pub importance: f64,
}

/// Untyped tabular records, as read from a CSV file.
/// Column names and cell contents are kept verbatim, validation happens during normalization.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ExtTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExtTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        ExtTable { headers, rows }
    }
}

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// Capacity of the carrier. Can be left out and supplied by the operator instead.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub capacity: Option<f64>,
    pub items: Vec<ExtItem>,
}

/// External representation of a [`LoadPlanEntry`](crate::entities::LoadPlanEntry).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadPlanEntry {
    pub name: String,
    pub weight_loaded: f64,
    pub utility_obtained: f64,
    pub fraction_loaded_percent: f64,
}

/// External representation of a [`LoadPlan`](crate::entities::LoadPlan).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadPlan {
    pub entries: Vec<ExtLoadPlanEntry>,
    pub capacity: f64,
    pub total_utility: f64,
    pub total_weight_loaded: f64,
    pub utilization_percent: f64,
}

/// External representation of a [`PrioritizedItem`](crate::entities::PrioritizedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPrioritizedItem {
    pub name: String,
    pub weight: f64,
    pub importance: f64,
    pub priority_ratio: f64,
}
