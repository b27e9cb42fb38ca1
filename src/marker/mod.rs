//! Marker grammar for workflow areas.
//!
//! Workflow areas are delimited by comment lines of the form:
//!
//! ```text
//! <prefix> BEGIN [ONCE] [SORTED] WORKFLOW AREA <name> FOR <id> [<id>...] [IF <flag>]
//! <prefix> ELSE
//! <prefix> END WORKFLOW AREA
//! ```
//!
//! The prefix is whatever precedes `BEGIN` (usually a line comment token). It is
//! kept verbatim as part of the start text, which the merge engine later uses
//! for literal region lookup.

mod parser;
mod types;


// Re-export public API
pub use parser::{is_area_end, is_else_marker, is_marker_line, parse_area_start};
pub use types::AreaHeader;
