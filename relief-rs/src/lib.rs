//! The base `relief-rs` crate: everything needed to model a fractional loading problem,
//! independent of the algorithm used to solve it.

/// Entities to model the fractional relief-loading problem
pub mod entities;

/// Normalizing external records into, and exporting load plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
