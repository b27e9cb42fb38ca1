//! Areasync: keep generated files in step with the templates they came from.
//!
//! Templates mark regions with `BEGIN [ONCE] [SORTED] WORKFLOW AREA <name> FOR
//! <ids> [IF <flag>]` / `END WORKFLOW AREA` comments. Each generated file
//! belongs to one workflow; syncing copies the template's areas for that
//! workflow into the file and leaves everything else alone.

pub mod area;
pub mod cli;
pub mod commands;
pub mod conditional;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;
pub mod marker;
pub mod merge;
pub mod specialize;
pub mod sync;
pub mod transform;
pub mod validate;

#[cfg(test)]
mod test_support;
