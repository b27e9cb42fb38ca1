//! Consistency validation for areasync.
//!
//! Checks that a generated file still has exactly the workflow areas its
//! template declares:
//! - every area is terminated
//! - no identity key repeats within a file
//! - template and generated file declare the same keys, except once-areas,
//!   which are allowed to be missing from the generated file
//!
//! Intended as a build-time or test-time gate. Violations are never ignored.

mod consistency;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use consistency::{check_consistency, validate_consistency};
pub use types::{ConsistencyReport, ConsistencyViolation, ViolationKind};
