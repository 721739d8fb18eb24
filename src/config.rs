//! Configuration loader and schema types.
//!
//! Settings tune how the scan directory is walked and how the organizer
//! behaves; every field has a default so no config file is required.

mod load;
mod schema;

pub use schema::*;
