use crate::entities::{Instance, Item, LoadPlan};
use crate::util::FPA;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

pub fn instance_item_weights_positive(items: &[Item]) -> bool {
    items.iter().all(|item| item.weight > 0.0)
}

/// Every entry loads a positive amount, never more than the item's weight,
/// and its utility is proportional to the loaded fraction.
pub fn plan_entries_within_bounds(plan: &LoadPlan, instance: &Instance) -> bool {
    plan.entries.iter().all(|entry| {
        let item = instance.item(entry.item_id);
        let valid = entry.weight_loaded > 0.0
            && FPA(entry.weight_loaded) <= FPA(item.weight)
            && entry.fraction_loaded_percent > 0.0
            && FPA(entry.fraction_loaded_percent) <= FPA(100.0)
            && FPA(entry.utility_obtained) == FPA(item.utility_of(entry.weight_loaded));
        if !valid {
            error!(
                "entry for item {} ({}) out of bounds: loaded {} of {}, {}%",
                item.id, item.name, entry.weight_loaded, item.weight, entry.fraction_loaded_percent
            );
        }
        valid
    })
}

/// Each item appears at most once in the plan.
pub fn plan_items_unique(plan: &LoadPlan) -> bool {
    plan.entries.iter().map(|e| e.item_id).all_unique()
}

/// The totals of the plan match the sum of its entries.
pub fn plan_totals_match_entries(plan: &LoadPlan) -> bool {
    let weight_sum: f64 = plan.entries.iter().map(|e| e.weight_loaded).sum();
    let utility_sum: f64 = plan.entries.iter().map(|e| e.utility_obtained).sum();

    FPA(weight_sum) == FPA(plan.total_weight_loaded) && FPA(utility_sum) == FPA(plan.total_utility)
}

/// Loaded weight never exceeds the capacity.
/// It equals the capacity if the items do not all fit, otherwise it equals the total item weight.
pub fn plan_conserves_weight(plan: &LoadPlan, instance: &Instance) -> bool {
    if !(instance.capacity > 0.0) || instance.is_empty() {
        return plan.is_empty() && plan.total_weight_loaded == 0.0;
    }
    let expected = f64::min(instance.capacity, instance.total_item_weight());
    FPA(plan.total_weight_loaded) <= FPA(instance.capacity)
        && FPA(plan.total_weight_loaded) == FPA(expected)
}

/// Entries are ordered by non-increasing priority ratio.
pub fn plan_ordered_by_priority(plan: &LoadPlan, instance: &Instance) -> bool {
    plan.entries
        .iter()
        .map(|e| instance.item(e.item_id).priority_ratio())
        .tuple_windows()
        .all(|(a, b)| a >= b)
}

/// At most one entry is partially loaded, and only the last one.
pub fn plan_only_last_entry_partial(plan: &LoadPlan) -> bool {
    match plan.entries.split_last() {
        None => true,
        Some((_, rest)) => rest.iter().all(|e| e.fraction_loaded_percent == 100.0),
    }
}

pub fn plan_is_consistent(plan: &LoadPlan, instance: &Instance) -> bool {
    plan_entries_within_bounds(plan, instance)
        && plan_items_unique(plan)
        && plan_totals_match_entries(plan)
        && plan_conserves_weight(plan, instance)
        && plan_ordered_by_priority(plan, instance)
        && plan_only_last_entry_partial(plan)
}
