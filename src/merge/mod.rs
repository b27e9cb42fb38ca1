//! Merge engine for areasync.
//!
//! Updates the workflow areas of an existing generated file from its template
//! without touching anything outside the areas. Each applicable area is merged
//! with one of three strategies:
//! - once-collapse: replace the whole area, markers included, with its content
//! - sorted-merge: keep the interior deduplicated and sorted
//! - append-if-absent: append the template lines unless already present
//!
//! Re-running a merge with the same inputs is a no-op for every area except
//! once-areas, which no longer exist after their first merge.

mod engine;
mod strategy;


// Re-export public API
pub use engine::{MergeOutcome, merge_areas, merge_areas_with_outcome};
pub use strategy::{MergeStrategy, Region};
