use std::fmt::Write;

use relief_rs::entities::{LoadPlan, PrioritizedItem};
use thousands::Separable;

const NAME_WIDTH: usize = 20;

/// Plain-text rendering of the results of a run: summary metrics, the load plan and the priority order.
pub fn render_report(plan: &LoadPlan, priority_order: &[PrioritizedItem]) -> String {
    let mut out = String::new();
    write_metrics(&mut out, plan);
    out.push('\n');
    write_load_plan(&mut out, plan);
    out.push('\n');
    write_priority_order(&mut out, priority_order);
    out
}

fn write_metrics(out: &mut String, plan: &LoadPlan) {
    let _ = writeln!(out, "== Load plan summary ==");
    let _ = writeln!(
        out,
        "Total utility achieved : {} U",
        grouped(plan.total_utility, 2)
    );
    let _ = writeln!(
        out,
        "Total weight loaded    : {} kg",
        grouped(plan.total_weight_loaded, 2)
    );
    let _ = writeln!(
        out,
        "Utilization            : {} % (capacity: {} kg)",
        grouped(plan.utilization_percent(), 1),
        grouped(plan.capacity, 1)
    );
    let _ = writeln!(
        out,
        "Remaining capacity     : {} kg",
        grouped(plan.remaining_capacity(), 2)
    );
}

fn write_load_plan(out: &mut String, plan: &LoadPlan) {
    let _ = writeln!(out, "== Load plan details ==");
    if plan.is_empty() {
        let _ = writeln!(out, "(nothing loaded)");
        return;
    }
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>14} {:>14} {:>10}",
        "Item", "Loaded (kg)", "Utility", "Fraction"
    );
    for entry in &plan.entries {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:>14} {:>14} {:>9.1}%",
            truncate(&entry.name),
            grouped(entry.weight_loaded, 2),
            grouped(entry.utility_obtained, 2),
            entry.fraction_loaded_percent
        );
    }
}

fn write_priority_order(out: &mut String, priority_order: &[PrioritizedItem]) {
    let _ = writeln!(out, "== Priority order (utility per kg, descending) ==");
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$} {:>12} {:>12} {:>12}",
        "Item", "Weight", "Importance", "Ratio"
    );
    for pi in priority_order {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$} {:>12} {:>12} {:>12.2}",
            truncate(&pi.item.name),
            grouped(pi.item.weight, 1),
            grouped(pi.item.importance, 1),
            pi.priority_ratio
        );
    }
}

/// Formats a number with a fixed number of decimals and comma-separated thousands.
pub fn grouped(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}").separate_with_commas()
}

fn truncate(name: &str) -> String {
    match name.chars().count() > NAME_WIDTH {
        true => name.chars().take(NAME_WIDTH - 1).chain(['…']).collect(),
        false => name.to_string(),
    }
}
