//! Area-by-area merge of a template into a generated file.

use crate::area::extract_areas;
use crate::conditional::{Flags, resolve};

use super::strategy::{MergeStrategy, Region};

/// Result of a merge, with the areas that were handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Full new content of the generated file.
    pub lines: Vec<String>,
    /// Names of areas whose strategy changed the file.
    pub changed: Vec<String>,
    /// Names of applicable areas that could not be located in the generated file.
    ///
    /// Once-areas whose BEGIN marker is gone were resolved by an earlier merge
    /// and are not listed.
    pub skipped: Vec<String>,
}

/// Merge the applicable areas of `source` into `target`.
///
/// See [`merge_areas_with_outcome`] for details.
pub fn merge_areas<F>(
    target: &[String],
    source: &[String],
    workflow_id: &str,
    transform: F,
    flags: &Flags,
) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    merge_areas_with_outcome(target, source, workflow_id, transform, flags).lines
}

/// Merge the applicable areas of `source` into `target` and report what happened.
///
/// Source areas are visited in document order. An area applies when its
/// workflow list contains `workflow_id`. For each applicable area:
/// 1. Resolve its body against `flags`.
/// 2. Find its region in the target by literal text: the first line equal to
///    the BEGIN text, then the first later line equal to the END text.
/// 3. Merge `transform`ed body lines with the area's [`MergeStrategy`].
///
/// A region that cannot be found is skipped with a warning; structural drift
/// is reported by the validator, not here. A once-area with no BEGIN marker in
/// the target was already collapsed and is passed over silently.
///
/// # Example
///
/// ```
/// use areasync::conditional::Flags;
/// use areasync::merge::merge_areas;
///
/// let to_lines = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
/// let source = to_lines(&["// BEGIN WORKFLOW AREA a FOR w1", "  x", "// END WORKFLOW AREA"]);
/// let target = to_lines(&["// BEGIN WORKFLOW AREA a FOR w1", "  existing", "// END WORKFLOW AREA"]);
///
/// let merged = merge_areas(&target, &source, "w1", |l| l.to_string(), &Flags::new());
/// assert_eq!(merged[1..3], to_lines(&["  existing", "  x"])[..]);
/// ```
pub fn merge_areas_with_outcome<F>(
    target: &[String],
    source: &[String],
    workflow_id: &str,
    transform: F,
    flags: &Flags,
) -> MergeOutcome
where
    F: Fn(&str) -> String,
{
    let mut outcome = MergeOutcome {
        lines: target.to_vec(),
        ..Default::default()
    };

    for area in extract_areas(source) {
        if !area.header.applies_to(workflow_id) {
            continue;
        }

        let Some(end_text) = area.end_text.as_deref() else {
            tracing::warn!(
                area = %area.name(),
                line = area.line_number,
                "template area has no END marker, skipping"
            );
            outcome.skipped.push(area.header.name.clone());
            continue;
        };

        let Some(region) = locate_region(&outcome.lines, &area.header.start_text, end_text) else {
            if area.header.once && !outcome.lines.contains(&area.header.start_text) {
                tracing::debug!(area = %area.name(), "once-area already resolved");
                continue;
            }
            tracing::warn!(
                area = %area.name(),
                start = %area.header.start_text,
                "area not found in generated file, skipping"
            );
            outcome.skipped.push(area.header.name.clone());
            continue;
        };

        let content: Vec<String> = resolve(&area.body, area.header.flag.as_deref(), flags)
            .iter()
            .map(|line| transform(line.as_str()))
            .collect();

        let strategy = MergeStrategy::for_header(&area.header);
        tracing::debug!(area = %area.name(), ?strategy, ?region, "merging area");

        if strategy.apply(&mut outcome.lines, region, content) {
            outcome.changed.push(area.header.name.clone());
        }
    }

    outcome
}

/// Find the first line equal to `start_text` and the first later line equal to
/// `end_text`.
fn locate_region(lines: &[String], start_text: &str, end_text: &str) -> Option<Region> {
    let start = lines.iter().position(|line| line == start_text)?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| line == end_text)
        .map(|offset| start + 1 + offset)?;

    Some(Region { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lines;

    #[test]
    fn test_locate_region() {
        let target = lines(&["x", "BEGIN", "a", "END", "END"]);

        assert_eq!(
            locate_region(&target, "BEGIN", "END"),
            Some(Region { start: 1, end: 3 })
        );
    }

    #[test]
    fn test_locate_region_requires_end_after_start() {
        let target = lines(&["END", "BEGIN", "a"]);
        assert_eq!(locate_region(&target, "BEGIN", "END"), None);
    }

    #[test]
    fn test_locate_region_missing_start() {
        let target = lines(&["a", "END"]);
        assert_eq!(locate_region(&target, "BEGIN", "END"), None);
    }
}
