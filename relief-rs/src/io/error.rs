use thiserror::Error;

/// Reasons a batch of external records is rejected before it reaches an allocator.
/// Row indices are 0-based and refer to data rows (headers excluded).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("row {row}: field '{field}' is not numeric: {value:?}")]
    NonNumericField {
        row: usize,
        field: String,
        value: String,
    },
    #[error("row {row}: invalid item: {reason}")]
    InvalidItem { row: usize, reason: String },
    #[error("no capacity provided")]
    MissingCapacity,
    #[error("capacity is not a finite number: {value}")]
    InvalidCapacity { value: f64 },
}
