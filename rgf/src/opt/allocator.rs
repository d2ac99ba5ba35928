use crate::opt::priority::priority_order;
use log::{debug, info};
use relief_rs::entities::{Instance, LoadPlan, LoadPlanEntry, PrioritizedItem};
use relief_rs::util::assertions;
use std::time::Instant;
use thousands::Separable;

/// Ratio Greedy Fill (RGF) allocator for the fractional loading problem.
///
/// Items are consumed in descending order of utility per unit of weight, each one loaded as far as the
/// remaining capacity allows. Only the last loaded item can end up partially loaded.
/// For divisible items this greedy strategy is optimal.
pub struct RGFAllocator {
    pub instance: Instance,
}

impl RGFAllocator {
    pub fn new(instance: Instance) -> Self {
        Self { instance }
    }

    /// The order in which [`RGFAllocator::solve`] consumes the items.
    pub fn priority_order(&self) -> Vec<PrioritizedItem> {
        priority_order(&self.instance)
    }

    pub fn solve(&self) -> LoadPlan {
        let start = Instant::now();
        let capacity = self.instance.capacity;

        // a carrier without (valid) capacity cannot load anything
        if !(capacity > 0.0) || self.instance.is_empty() {
            info!(
                "[RGF] nothing to allocate ({} items, capacity {})",
                self.instance.items.len(),
                capacity
            );
            return LoadPlan::empty(capacity);
        }

        let mut plan = LoadPlan::empty(capacity);
        let mut remaining = capacity;

        for PrioritizedItem {
            item,
            priority_ratio,
        } in self.priority_order()
        {
            if remaining <= 0.0 {
                break;
            }

            let (weight_loaded, utility_obtained) = match remaining >= item.weight {
                true => {
                    // load the item in its entirety
                    remaining -= item.weight;
                    (item.weight, item.importance)
                }
                false => {
                    // load the fraction that still fits, the carrier is full afterwards
                    let weight_loaded = remaining;
                    remaining = 0.0;
                    (weight_loaded, item.utility_of(weight_loaded))
                }
            };

            debug!(
                "[RGF] loading {:.3} of {:.3} of item {} ({}) with ratio {:.3}, {:.3} remaining",
                weight_loaded, item.weight, item.id, item.name, priority_ratio, remaining
            );

            plan.total_utility += utility_obtained;
            plan.total_weight_loaded += weight_loaded;
            plan.entries.push(LoadPlanEntry {
                item_id: item.id,
                fraction_loaded_percent: weight_loaded / item.weight * 100.0,
                name: item.name,
                weight_loaded,
                utility_obtained,
            });
        }

        debug_assert!(assertions::plan_is_consistent(&plan, &self.instance));

        info!(
            "[RGF] allocation finished in {:.3}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        info!(
            "[RGF] loaded {}/{} items ({} partially) for a utility of {}, utilization {:.1}%",
            plan.entries.len(),
            self.instance.items.len(),
            plan.n_partial(),
            format!("{:.2}", plan.total_utility).separate_with_commas(),
            plan.utilization_percent()
        );

        plan
    }
}
