//! Destination planning: where each track goes inside the target directory.
//!
//! The plan is pure data. Executing it (or only previewing it) is up to the
//! caller, see `runtime::materialize`.

mod build;

pub use build::*;

#[cfg(test)]
mod tests;
