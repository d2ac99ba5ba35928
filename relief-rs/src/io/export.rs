use crate::entities::{Instance, LoadPlan, LoadPlanEntry, PrioritizedItem};
use crate::io::ext_repr::{
    ExtInstance, ExtItem, ExtLoadPlan, ExtLoadPlanEntry, ExtPrioritizedItem,
};

/// Exports a load plan out of the library
pub fn export_load_plan(plan: &LoadPlan) -> ExtLoadPlan {
    ExtLoadPlan {
        entries: plan.entries.iter().map(export_load_plan_entry).collect(),
        capacity: plan.capacity,
        total_utility: plan.total_utility,
        total_weight_loaded: plan.total_weight_loaded,
        utilization_percent: plan.utilization_percent(),
    }
}

pub fn export_load_plan_entry(entry: &LoadPlanEntry) -> ExtLoadPlanEntry {
    ExtLoadPlanEntry {
        name: entry.name.clone(),
        weight_loaded: entry.weight_loaded,
        utility_obtained: entry.utility_obtained,
        fraction_loaded_percent: entry.fraction_loaded_percent,
    }
}

/// Exports a sequence of prioritized items, keeping their order
pub fn export_priority_order(order: &[PrioritizedItem]) -> Vec<ExtPrioritizedItem> {
    order
        .iter()
        .map(|pi| ExtPrioritizedItem {
            name: pi.item.name.clone(),
            weight: pi.item.weight,
            importance: pi.item.importance,
            priority_ratio: pi.priority_ratio,
        })
        .collect()
}

/// Exports the (normalized) instance, including its resolved capacity
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        capacity: Some(instance.capacity),
        items: instance
            .items
            .iter()
            .map(|item| ExtItem {
                name: item.name.clone(),
                weight: item.weight,
                importance: item.importance,
            })
            .collect(),
    }
}
