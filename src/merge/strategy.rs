//! Per-area merge strategies.

use crate::marker::AreaHeader;
use std::collections::BTreeSet;

/// Position of an area's markers in the generated file (0-based, inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Index of the BEGIN line.
    pub start: usize,
    /// Index of the END line.
    pub end: usize,
}

impl Region {
    fn interior(self) -> std::ops::Range<usize> {
        self.start + 1..self.end
    }
}

/// How an area's template content is folded into the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace the area, markers included, with its content. ONCE wins over SORTED.
    OnceCollapse,
    /// Union of existing non-blank lines and template lines, deduplicated and sorted.
    SortedMerge,
    /// Append the template lines before END unless they already appear as a
    /// contiguous run. Reordered or scattered copies are not detected.
    AppendIfAbsent,
}

impl MergeStrategy {
    /// Pick the strategy declared by a BEGIN marker.
    pub fn for_header(header: &AreaHeader) -> Self {
        match (header.once, header.sorted) {
            (true, _) => MergeStrategy::OnceCollapse,
            (false, true) => MergeStrategy::SortedMerge,
            (false, false) => MergeStrategy::AppendIfAbsent,
        }
    }

    /// Apply this strategy to `lines` at `region`.
    ///
    /// `content` is the resolved and transformed template body. Returns whether
    /// `lines` changed.
    pub fn apply(self, lines: &mut Vec<String>, region: Region, content: Vec<String>) -> bool {
        match self {
            MergeStrategy::OnceCollapse => {
                lines.splice(region.start..=region.end, content);
                true
            }
            MergeStrategy::SortedMerge => {
                let merged: BTreeSet<String> = lines[region.interior()]
                    .iter()
                    .filter(|line| !line.trim().is_empty())
                    .cloned()
                    .chain(content)
                    .collect();
                let merged: Vec<String> = merged.into_iter().collect();

                if lines[region.interior()] == merged[..] {
                    return false;
                }
                lines.splice(region.interior(), merged);
                true
            }
            MergeStrategy::AppendIfAbsent => {
                if contains_run(&lines[region.interior()], &content) {
                    return false;
                }
                lines.splice(region.end..region.end, content);
                true
            }
        }
    }
}

/// Whether `needle` occurs in `haystack` as a contiguous, ordered run.
///
/// An empty needle is always present.
fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::parse_area_start;
    use crate::test_support::lines;

    #[test]
    fn test_strategy_from_header() {
        let cases = [
            ("// BEGIN WORKFLOW AREA a FOR w", MergeStrategy::AppendIfAbsent),
            ("// BEGIN SORTED WORKFLOW AREA a FOR w", MergeStrategy::SortedMerge),
            ("// BEGIN ONCE WORKFLOW AREA a FOR w", MergeStrategy::OnceCollapse),
            ("// BEGIN ONCE SORTED WORKFLOW AREA a FOR w", MergeStrategy::OnceCollapse),
        ];

        for (marker, expected) in cases {
            let header = parse_area_start(marker).unwrap();
            assert_eq!(MergeStrategy::for_header(&header), expected, "{}", marker);
        }
    }

    #[test]
    fn test_contains_run() {
        let haystack = lines(&["a", "b", "c"]);

        assert!(contains_run(&haystack, &lines(&["b", "c"])));
        assert!(contains_run(&haystack, &[]));
        assert!(!contains_run(&haystack, &lines(&["a", "c"])));
        assert!(!contains_run(&haystack, &lines(&["c", "b"])));
        assert!(!contains_run(&[], &lines(&["a"])));
    }

    #[test]
    fn test_sorted_merge_reports_unchanged() {
        let mut target = lines(&["BEGIN", "a", "b", "END"]);
        let region = Region { start: 0, end: 3 };

        let changed = MergeStrategy::SortedMerge.apply(&mut target, region, lines(&["b"]));

        assert!(!changed);
        assert_eq!(target, lines(&["BEGIN", "a", "b", "END"]));
    }
}
