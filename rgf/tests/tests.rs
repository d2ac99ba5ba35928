#[cfg(test)]
mod tests {
    use std::path::Path;

    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use relief_rs::entities::{Instance, Item, LoadPlan};
    use relief_rs::io::ValidationError;
    use relief_rs::io::export::export_load_plan;
    use relief_rs::io::import::{InvalidItemPolicy, Normalizer};
    use relief_rs::util::FPA;
    use relief_rs::util::assertions;
    use rgf::config::RGFConfig;
    use rgf::io;
    use rgf::opt::{RGFAllocator, priority_order};
    use test_case::test_case;

    fn instance(items: &[(&str, f64, f64)], capacity: f64) -> Instance {
        let items = items
            .iter()
            .enumerate()
            .map(|(id, (name, weight, importance))| Item::new(id, *name, *weight, *importance))
            .collect_vec();
        Instance::new(items, capacity)
    }

    fn solve(instance: &Instance) -> LoadPlan {
        RGFAllocator::new(instance.clone()).solve()
    }

    fn abc(capacity: f64) -> Instance {
        instance(
            &[("A", 10.0, 60.0), ("B", 20.0, 100.0), ("C", 30.0, 120.0)],
            capacity,
        )
    }

    /// Utility of filling the carrier greedily in an arbitrary item order
    fn fill_in_order(instance: &Instance, order: &[usize]) -> f64 {
        let mut remaining = instance.capacity;
        let mut utility = 0.0;
        for &id in order {
            let item = instance.item(id);
            let loaded = f64::min(remaining, item.weight);
            utility += item.utility_of(loaded);
            remaining -= loaded;
        }
        utility
    }

    fn random_instance(rng: &mut SmallRng, n_items: usize) -> Instance {
        let items = (0..n_items)
            .map(|id| {
                Item::new(
                    id,
                    format!("item_{id}"),
                    rng.random_range(0.5..50.0),
                    rng.random_range(0.5..100.0),
                )
            })
            .collect_vec();
        let total_weight: f64 = items.iter().map(|i| i.weight).sum();
        let capacity = total_weight * rng.random_range(0.1..1.3);
        Instance::new(items, capacity)
    }

    #[test]
    fn abc_scenario() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .try_init();

        let plan = solve(&abc(25.0));

        assert_eq!(plan.entries.len(), 2);
        let (a, b) = (&plan.entries[0], &plan.entries[1]);

        assert_eq!(a.name, "A");
        assert!(approx_eq!(f64, a.weight_loaded, 10.0));
        assert!(approx_eq!(f64, a.utility_obtained, 60.0));
        assert!(approx_eq!(f64, a.fraction_loaded_percent, 100.0));

        assert_eq!(b.name, "B");
        assert!(approx_eq!(f64, b.weight_loaded, 15.0));
        assert!(approx_eq!(f64, b.utility_obtained, 75.0));
        assert!(approx_eq!(f64, b.fraction_loaded_percent, 75.0));

        assert!(approx_eq!(f64, plan.total_utility, 135.0));
        assert!(approx_eq!(f64, plan.total_weight_loaded, 25.0));
        assert!(approx_eq!(f64, plan.utilization_percent(), 100.0));
    }

    #[test]
    fn priority_view_lists_every_item() {
        let order = priority_order(&abc(25.0));

        assert_eq!(
            order.iter().map(|pi| pi.item.name.as_str()).collect_vec(),
            ["A", "B", "C"]
        );
        assert_eq!(
            order.iter().map(|pi| pi.priority_ratio).collect_vec(),
            [6.0, 5.0, 4.0]
        );
    }

    #[test_case(0.0; "zero")]
    #[test_case(-5.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    fn degenerate_capacity_yields_empty_plan(capacity: f64) {
        let plan = solve(&abc(capacity));

        assert!(plan.is_empty());
        assert_eq!(plan.total_utility, 0.0);
        assert_eq!(plan.total_weight_loaded, 0.0);
        assert_eq!(plan.utilization_percent(), 0.0);
    }

    #[test]
    fn empty_item_list_yields_empty_plan() {
        let plan = solve(&instance(&[], 100.0));

        assert!(plan.is_empty());
        assert_eq!(plan.total_utility, 0.0);
        assert_eq!(plan.total_weight_loaded, 0.0);
        assert_eq!(plan.utilization_percent(), 0.0);
    }

    #[test_case(60.0; "exact fit")]
    #[test_case(100.0; "spare capacity")]
    fn everything_fits(capacity: f64) {
        let instance = abc(capacity);
        let plan = solve(&instance);

        assert_eq!(plan.entries.len(), 3);
        for entry in &plan.entries {
            let item = instance.item(entry.item_id);
            assert_eq!(entry.weight_loaded, item.weight);
            assert_eq!(entry.utility_obtained, item.importance);
            assert_eq!(entry.fraction_loaded_percent, 100.0);
        }
        assert!(approx_eq!(f64, plan.total_weight_loaded, 60.0));
        assert!(approx_eq!(f64, plan.total_utility, 280.0));
        assert!(approx_eq!(
            f64,
            plan.utilization_percent(),
            60.0 / capacity * 100.0
        ));
    }

    #[test]
    fn capacity_smaller_than_best_item() {
        let plan = solve(&abc(5.0));

        assert_eq!(plan.entries.len(), 1);
        assert_eq!(plan.entries[0].name, "A");
        assert!(approx_eq!(f64, plan.entries[0].fraction_loaded_percent, 50.0));
        assert!(approx_eq!(f64, plan.total_utility, 30.0));
    }

    #[test]
    fn equal_ratios_are_loaded_in_input_order() {
        let instance = instance(
            &[("X", 10.0, 10.0), ("Y", 5.0, 5.0), ("Z", 20.0, 20.0)],
            12.0,
        );
        let plan = solve(&instance);

        assert_eq!(plan.entries.iter().map(|e| e.name.as_str()).collect_vec(), ["X", "Y"]);
        assert!(approx_eq!(f64, plan.entries[1].weight_loaded, 2.0));
    }

    #[test]
    fn duplicate_names_are_kept_apart() {
        let instance = instance(&[("Water", 10.0, 20.0), ("Water", 10.0, 10.0)], 15.0);
        let plan = solve(&instance);

        assert_eq!(plan.entries.iter().map(|e| e.item_id).collect_vec(), [0, 1]);
        assert!(approx_eq!(f64, plan.entries[1].weight_loaded, 5.0));
    }

    #[test]
    fn allocation_is_deterministic() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..20 {
            let instance = random_instance(&mut rng, 25);
            assert_eq!(solve(&instance), solve(&instance));
        }
    }

    #[test]
    fn random_plans_are_consistent() {
        let mut rng = SmallRng::seed_from_u64(1);
        for n_items in [1, 2, 5, 10, 50, 200] {
            let instance = random_instance(&mut rng, n_items);
            let plan = solve(&instance);

            assert!(assertions::plan_is_consistent(&plan, &instance));
            assert!(FPA(plan.total_weight_loaded) <= FPA(instance.capacity));
            for entry in &plan.entries {
                assert!(entry.weight_loaded > 0.0);
                assert!(entry.fraction_loaded_percent > 0.0);
                assert!(FPA(entry.fraction_loaded_percent) <= FPA(100.0));
            }
        }
    }

    #[test]
    fn greedy_beats_every_other_fill_order() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..10 {
            let instance = random_instance(&mut rng, 6);
            let greedy = solve(&instance).total_utility;

            for order in (0..instance.items.len()).permutations(instance.items.len()) {
                let other = fill_in_order(&instance, &order);
                assert!(FPA(greedy) >= FPA(other), "{greedy} < {other} for {order:?}");
            }
        }
    }

    #[test]
    fn greedy_beats_random_feasible_allocations() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..50 {
            let instance = random_instance(&mut rng, 12);
            let greedy = solve(&instance).total_utility;

            for _ in 0..100 {
                let fractions = (0..instance.items.len())
                    .map(|_| rng.random_range(0.0..=1.0))
                    .collect_vec();
                let weight: f64 = instance
                    .items
                    .iter()
                    .zip(&fractions)
                    .map(|(item, f)| item.weight * f)
                    .sum();
                // scale down until the allocation respects the capacity
                let scale = match weight > instance.capacity {
                    true => instance.capacity / weight,
                    false => 1.0,
                };
                let utility: f64 = instance
                    .items
                    .iter()
                    .zip(&fractions)
                    .map(|(item, f)| item.importance * f * scale)
                    .sum();
                assert!(FPA(greedy) >= FPA(utility));
            }
        }
    }

    #[test_case("../assets/abc.csv"; "abc csv")]
    #[test_case("../assets/relief_supplies.csv"; "relief supplies csv")]
    fn csv_instances(instance_path: &str) {
        let table = io::read_csv_table(Path::new(instance_path)).unwrap();
        let instance = Normalizer::default()
            .normalize_table_instance(&table, 100.0)
            .unwrap();
        let plan = solve(&instance);

        assert!(assertions::plan_is_consistent(&plan, &instance));
    }

    #[test]
    fn relief_supplies_json() {
        let ext_instance = io::read_json_instance(Path::new("../assets/relief_supplies.json")).unwrap();
        let instance = Normalizer::default()
            .normalize_instance(&ext_instance, None)
            .unwrap();
        let plan = solve(&instance);

        assert_eq!(
            plan.entries.iter().map(|e| e.name.as_str()).collect_vec(),
            [
                "First aid kits",
                "Baby formula",
                "Water",
                "Flashlights",
                "Rice",
                "Blankets",
                "Tents"
            ]
        );
        assert_eq!(plan.n_partial(), 1);
        assert!(approx_eq!(f64, plan.entries[6].weight_loaded, 1.0));
        assert!(approx_eq!(f64, plan.total_utility, 464.0));
        assert!(approx_eq!(f64, plan.utilization_percent(), 100.0));

        let ext_plan = export_load_plan(&plan);
        assert_eq!(ext_plan.entries.len(), 7);
        assert!(approx_eq!(f64, ext_plan.utilization_percent, 100.0));
    }

    #[test]
    fn csv_and_json_inputs_agree() {
        let table = io::read_csv_table(Path::new("../assets/relief_supplies.csv")).unwrap();
        let from_csv = Normalizer::default()
            .normalize_table_instance(&table, 100.0)
            .unwrap();
        let ext_instance = io::read_json_instance(Path::new("../assets/relief_supplies.json")).unwrap();
        let from_json = Normalizer::default()
            .normalize_instance(&ext_instance, None)
            .unwrap();

        assert_eq!(from_csv.items, from_json.items);
        assert_eq!(solve(&from_csv), solve(&from_json));
    }

    #[test]
    fn manual_defaults_without_capacity() {
        let ext_instance = io::read_json_instance(Path::new("../assets/manual_defaults.json")).unwrap();
        let normalizer = Normalizer::default();

        assert_eq!(
            normalizer.normalize_instance(&ext_instance, None).unwrap_err(),
            ValidationError::MissingCapacity
        );

        let instance = normalizer
            .normalize_instance(&ext_instance, Some(RGFConfig::default().default_capacity))
            .unwrap();
        let plan = solve(&instance);
        assert_eq!(plan.entries.len(), 4);
        assert!(approx_eq!(f64, plan.utilization_percent(), 40.0));
    }

    #[test]
    fn csv_parsing_keeps_cells_verbatim() {
        let csv = "\u{feff}Item,Weight,Importance\nWater, 10 ,abc\nRice,20\n";
        let table = io::parse_csv_table(csv.as_bytes()).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["Water", "10", "abc"]);
        assert_eq!(table.rows[1], ["Rice", "20"]);

        let err = Normalizer::default().normalize_table(&table).unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericField { row: 0, .. }));
    }

    #[test]
    fn config_file_roundtrip() {
        let config = io::read_config(Path::new("../assets/config_drop_invalid.json")).unwrap();

        assert_eq!(config.default_capacity, 50.0);
        assert_eq!(config.invalid_item_policy, InvalidItemPolicy::DropItem);
        assert!(!config.chart.bar_labels);

        let json = serde_json::to_string(&RGFConfig::default()).unwrap();
        let parsed: RGFConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, RGFConfig::default());
    }
}
