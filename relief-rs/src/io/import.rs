use crate::entities::{Instance, Item};
use crate::io::ValidationError;
use crate::io::ext_repr::{ExtInstance, ExtItem, ExtTable};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Accepted (normalized) header names of the column holding the item labels
pub const ITEM_COLUMN: &[&str] = &["item", "name"];
/// Accepted (normalized) header names of the column holding the item weights
pub const WEIGHT_COLUMN: &[&str] = &["weight"];
/// Accepted (normalized) header names of the column holding the item importance scores
pub const IMPORTANCE_COLUMN: &[&str] = &["importance", "utility"];

/// What to do with a record that parses correctly but cannot be loaded
/// (non-positive weight or importance, empty name).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidItemPolicy {
    /// The entire batch is rejected, consistent with how non-numeric fields are handled
    #[default]
    RejectBatch,
    /// The offending record is dropped and the rest of the batch is kept
    DropItem,
}

/// Validates external records and converts them into [`Item`]s ready for allocation.
///
/// Any field that does not parse as a finite number rejects the entire batch, never just the row.
/// On failure no items are returned at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    pub invalid_item_policy: InvalidItemPolicy,
}

/// A record whose numeric fields have been parsed, but not yet validated.
struct ParsedRecord<'a> {
    row: usize,
    name: &'a str,
    weight: f64,
    importance: f64,
}

/// Column indices of the required fields within a table
#[derive(Debug, Clone, Copy, PartialEq)]
struct ColumnMap {
    item: usize,
    weight: usize,
    importance: usize,
}

impl Normalizer {
    pub fn new(invalid_item_policy: InvalidItemPolicy) -> Normalizer {
        Normalizer {
            invalid_item_policy,
        }
    }

    /// Normalizes untyped tabular records (e.g. the contents of a CSV file).
    pub fn normalize_table(&self, table: &ExtTable) -> Result<Vec<Item>, ValidationError> {
        let columns = locate_columns(&table.headers)?;

        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = move |col: usize| cells.get(col).map(|c| c.trim()).unwrap_or("");
                Ok(ParsedRecord {
                    row,
                    name: cell(columns.item),
                    weight: parse_numeric(row, "weight", cell(columns.weight))?,
                    importance: parse_numeric(row, "importance", cell(columns.importance))?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        self.build_items(records)
    }

    /// Normalizes typed records (e.g. entered manually or read from JSON).
    pub fn normalize_items(&self, ext_items: &[ExtItem]) -> Result<Vec<Item>, ValidationError> {
        let records = ext_items
            .iter()
            .enumerate()
            .map(|(row, ext_item)| {
                Ok(ParsedRecord {
                    row,
                    name: ext_item.name.trim(),
                    weight: ensure_finite(row, "weight", ext_item.weight)?,
                    importance: ensure_finite(row, "importance", ext_item.importance)?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        self.build_items(records)
    }

    /// Normalizes an external instance.
    /// `capacity_override` takes precedence over the capacity defined in the instance itself.
    pub fn normalize_instance(
        &self,
        ext_instance: &ExtInstance,
        capacity_override: Option<f64>,
    ) -> Result<Instance, ValidationError> {
        let capacity = capacity_override
            .or(ext_instance.capacity)
            .ok_or(ValidationError::MissingCapacity)?;
        let items = self.normalize_items(&ext_instance.items)?;
        build_instance(items, capacity)
    }

    /// Normalizes a table and combines it with a capacity supplied by the operator.
    pub fn normalize_table_instance(
        &self,
        table: &ExtTable,
        capacity: f64,
    ) -> Result<Instance, ValidationError> {
        let items = self.normalize_table(table)?;
        build_instance(items, capacity)
    }

    fn build_items(&self, records: Vec<ParsedRecord<'_>>) -> Result<Vec<Item>, ValidationError> {
        let n_records = records.len();
        let mut items = Vec::with_capacity(n_records);

        for record in records {
            match validate_record(&record) {
                Ok(()) => items.push(Item::new(
                    items.len(),
                    record.name,
                    record.weight,
                    record.importance,
                )),
                Err(err) => match self.invalid_item_policy {
                    InvalidItemPolicy::RejectBatch => return Err(err),
                    InvalidItemPolicy::DropItem => warn!("[NORM] dropping record: {err}"),
                },
            }
        }

        debug!("[NORM] normalized {}/{} records", items.len(), n_records);
        Ok(items)
    }
}

fn build_instance(items: Vec<Item>, capacity: f64) -> Result<Instance, ValidationError> {
    if !capacity.is_finite() {
        return Err(ValidationError::InvalidCapacity { value: capacity });
    }
    if capacity <= 0.0 {
        warn!("[NORM] capacity of {capacity} leaves no room for any item");
    }
    Ok(Instance::new(items, capacity))
}

/// Strips a leading BOM and surrounding whitespace and lowercases the header.
pub fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

fn locate_columns(headers: &[String]) -> Result<ColumnMap, ValidationError> {
    let normalized = headers.iter().map(|h| normalize_header(h)).collect::<Vec<_>>();
    let find = |aliases: &[&str]| normalized.iter().position(|h| aliases.contains(&h.as_str()));

    match (find(ITEM_COLUMN), find(WEIGHT_COLUMN), find(IMPORTANCE_COLUMN)) {
        (Some(item), Some(weight), Some(importance)) => Ok(ColumnMap {
            item,
            weight,
            importance,
        }),
        (item, weight, importance) => {
            let missing = [(item, "Item"), (weight, "Weight"), (importance, "Importance")]
                .into_iter()
                .filter(|(col, _)| col.is_none())
                .map(|(_, name)| name.to_string())
                .collect();
            Err(ValidationError::MissingColumns { missing })
        }
    }
}

fn parse_numeric(row: usize, field: &str, value: &str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::NonNumericField {
            row,
            field: field.to_string(),
            value: value.to_string(),
        })
}

fn ensure_finite(row: usize, field: &str, value: f64) -> Result<f64, ValidationError> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(ValidationError::NonNumericField {
            row,
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

fn validate_record(record: &ParsedRecord<'_>) -> Result<(), ValidationError> {
    let reason = if record.name.is_empty() {
        Some("name is empty".to_string())
    } else if record.weight <= 0.0 {
        Some(format!("weight must be positive, got {}", record.weight))
    } else if record.importance <= 0.0 {
        Some(format!("importance must be positive, got {}", record.importance))
    } else {
        None
    };

    match reason {
        None => Ok(()),
        Some(reason) => Err(ValidationError::InvalidItem {
            row: record.row,
            reason,
        }),
    }
}
