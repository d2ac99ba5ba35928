/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for validating external records and converting them into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

mod error;

#[doc(inline)]
pub use error::ValidationError;
