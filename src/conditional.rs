//! Conditional branch selection for `IF <flag>` areas.
//!
//! An area body may be split by an ELSE marker into an IF block and an ELSE
//! block. The caller's flag map decides which block is used; the two are never
//! mixed.

use crate::marker::is_else_marker;
use std::collections::BTreeMap;

/// Caller-supplied flag settings, keyed by flag name.
pub type Flags = BTreeMap<String, bool>;

/// Split a body at its first ELSE marker.
///
/// The marker belongs to neither block. Without an ELSE marker the whole body
/// is the IF block and the ELSE block is empty.
pub fn split_if_else(body: &[String]) -> (&[String], &[String]) {
    match body.iter().position(|line| is_else_marker(line)) {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, &body[body.len()..]),
    }
}

/// Choose the block of `body` selected by `flag_name`.
///
/// Without a flag name the IF block is returned. A flag missing from `flags`
/// counts as false.
///
/// # Example
///
/// ```
/// use areasync::conditional::{Flags, resolve};
///
/// let body: Vec<String> = vec!["multipart".into(), "// ELSE".into(), "json".into()];
/// let mut flags = Flags::new();
///
/// assert_eq!(resolve(&body, Some("upload"), &flags), ["json".to_string()]);
/// flags.insert("upload".into(), true);
/// assert_eq!(resolve(&body, Some("upload"), &flags), ["multipart".to_string()]);
/// ```
pub fn resolve<'a>(body: &'a [String], flag_name: Option<&str>, flags: &Flags) -> &'a [String] {
    let (if_block, else_block) = split_if_else(body);

    match flag_name {
        None => if_block,
        Some(name) => {
            if flags.get(name).copied().unwrap_or(false) {
                if_block
            } else {
                else_block
            }
        }
    }
}
