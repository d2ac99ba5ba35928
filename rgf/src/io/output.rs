use crate::config::RGFConfig;
use relief_rs::io::ext_repr::{ExtInstance, ExtLoadPlan, ExtPrioritizedItem};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RGFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtLoadPlan,
    /// The order in which the items were considered
    pub priority_order: Vec<ExtPrioritizedItem>,
    pub config: RGFConfig,
}
