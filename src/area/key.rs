//! Canonical area identity keys.

use crate::marker::AreaHeader;
use std::fmt;

/// Canonical form of an area header, used to match areas between a template
/// and a generated file.
///
/// Two areas are the same area iff their keys are equal. Workflow ids are
/// sorted, so `FOR web api` and `FOR api web` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AreaKey(String);

impl AreaKey {
    /// The canonical key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AreaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rebuild a BEGIN marker in canonical form.
pub fn compute_area_key(header: &AreaHeader) -> AreaKey {
    let mut key = String::with_capacity(header.start_text.len());

    key.push_str(&header.prefix);
    key.push_str("BEGIN ");
    if header.once {
        key.push_str("ONCE ");
    }
    if header.sorted {
        key.push_str("SORTED ");
    }
    key.push_str("WORKFLOW AREA ");
    key.push_str(&header.name);
    key.push_str(" FOR ");
    key.push_str(&header.sorted_workflows().join(" "));
    if let Some(flag) = &header.flag {
        key.push_str(" IF ");
        key.push_str(flag);
    }

    AreaKey(key)
}
