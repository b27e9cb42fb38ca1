//! Parsed BEGIN marker.

use serde::Serialize;

/// Metadata extracted from a BEGIN marker line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AreaHeader {
    /// Text before the `BEGIN` token, verbatim (e.g. `"// "`).
    pub prefix: String,
    /// Area name.
    pub name: String,
    /// Workflow ids in the order they were written.
    pub workflows: Vec<String>,
    /// `ONCE` token present.
    pub once: bool,
    /// `SORTED` token present.
    pub sorted: bool,
    /// Flag name from a trailing `IF <flag>` clause.
    pub flag: Option<String>,
    /// The full BEGIN line as written.
    pub start_text: String,
}

impl AreaHeader {
    /// Whether this area carries content for the given workflow.
    pub fn applies_to(&self, workflow_id: &str) -> bool {
        self.workflows.iter().any(|w| w == workflow_id)
    }

    /// Whether this area selects its body through an `IF <flag>` clause.
    pub fn is_conditional(&self) -> bool {
        self.flag.is_some()
    }

    /// Workflow ids sorted lexicographically, for order-independent comparison.
    pub fn sorted_workflows(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.workflows.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
