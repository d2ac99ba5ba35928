use itertools::Itertools;
use ordered_float::OrderedFloat;
use relief_rs::entities::{Instance, PrioritizedItem};
use std::cmp::Reverse;

/// Items of the instance decorated with their priority ratio, sorted by descending ratio.
/// The sort is stable: items with equal ratios keep their relative input order.
pub fn priority_order(instance: &Instance) -> Vec<PrioritizedItem> {
    instance
        .items
        .iter()
        .map(PrioritizedItem::from)
        .sorted_by_cached_key(|pi| Reverse(OrderedFloat(pi.priority_ratio)))
        .collect_vec()
}
