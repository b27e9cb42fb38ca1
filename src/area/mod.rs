//! Area extraction for areasync.
//!
//! Scans a whole file into the ordered list of workflow areas it contains.
//! Areas are transient: they are rebuilt from the lines on every scan.
//!
//! Nesting is not supported. A BEGIN seen while another area is still open
//! force-closes the open area without an end marker, which the validator then
//! rejects.

mod extract;
mod key;


// Re-export public API
pub use extract::{Area, extract_areas};
pub use key::{AreaKey, compute_area_key};
