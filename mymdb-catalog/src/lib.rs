//! Movie catalog data model types and field validation.
//!
//! This crate defines the catalog's transfer objects without any database
//! dependencies. Consumers can use these types directly for serialization,
//! display, or passing to `mymdb-db` for persistence.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{is_valid_rating, is_valid_runtime, is_valid_year, parse_year, YearSpan};
