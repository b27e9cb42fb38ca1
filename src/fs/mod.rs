//! Filesystem utilities for areasync.
//!
//! Reading files as line sequences and writing generated files atomically, so
//! an interrupted sync never leaves a half-written target.

mod atomic;
mod lines;

pub use atomic::atomic_write_file;
pub use lines::{
    TextFile, TextLayout, join_lines, read_lines, read_text, read_text_if_exists, split_lines,
};
