use relief_rs::io::import::InvalidItemPolicy;
use serde::{Deserialize, Serialize};

use crate::io::chart::ChartOptions;

/// Configuration for the RGF allocator and its command line front end
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RGFConfig {
    /// Capacity of the carrier, used when neither the input file nor the command line defines one
    pub default_capacity: f64,
    /// How records with a non-positive weight or importance (or without a name) are handled
    #[serde(default)]
    pub invalid_item_policy: InvalidItemPolicy,
    /// Optional SVG chart options
    #[serde(default)]
    pub chart: ChartOptions,
}

impl Default for RGFConfig {
    fn default() -> Self {
        Self {
            default_capacity: 100.0,
            invalid_item_policy: InvalidItemPolicy::RejectBatch,
            chart: ChartOptions::default(),
        }
    }
}
