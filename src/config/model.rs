//! Config struct definition and default implementation.

use crate::conditional::Flags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Manifest file name looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "areasync.yaml";

/// Configuration for an areasync run.
///
/// This struct represents the contents of `areasync.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to run the consistency check before merging into an existing target.
    #[serde(default = "default_true")]
    pub validate_before_merge: bool,

    /// Literal token -> replacement pairs applied to every template line.
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,

    /// Files to keep in sync, processed in order.
    #[serde(default)]
    pub entries: Vec<SyncEntry>,
}

/// One template -> generated file mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Template path, relative to the manifest directory.
    pub template: String,

    /// Generated file path, relative to the manifest directory.
    pub target: String,

    /// Workflow id selecting which areas apply.
    pub workflow: String,

    /// Flags for `IF <flag>` areas. Missing flags count as false.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: Flags,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validate_before_merge: default_true(),
            replacements: BTreeMap::new(),
            entries: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
